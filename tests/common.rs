// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds the full application router with a mock todo client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(dead_code)]

//! Shared test utilities for `starter_api`
//!
//! Provides the application router wired against the mock todo client so
//! integration tests never touch the network.

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use starter_api::{
    config::environment::ServerConfig,
    context::ServerResources,
    external::{MockTodoClient, TodoProvider},
    server,
    services::UserService,
};
use std::sync::Arc;

/// Build the full application router backed by in-process state and the
/// mock todo client
pub fn test_app() -> Router {
    test_app_with_todo_client(Arc::new(MockTodoClient::new()))
}

/// Build the full application router with a caller-supplied todo provider,
/// used to exercise upstream failure paths
pub fn test_app_with_todo_client(todo_client: Arc<dyn TodoProvider>) -> Router {
    let resources = Arc::new(ServerResources::new(
        Arc::new(UserService::new()),
        todo_client,
        Arc::new(ServerConfig::default()),
    ));
    server::router(resources)
}

/// Collect a response body and deserialize it as JSON
pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes
pub async fn body_bytes(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Build a GET request with an empty body
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a request with a JSON body
pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request with the given method
pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
