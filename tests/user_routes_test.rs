// ABOUTME: Integration tests for the user CRUD routes and their error mapping
// ABOUTME: Exercises not-found and validation problem-detail responses end to end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! User route integration tests

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, get_request, json_request, test_app};
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn listing_users_starts_empty() {
    let app = test_app();
    let resp = app.oneshot(get_request("/api/v1/user")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["users"], Value::Array(vec![]));
}

#[tokio::test]
async fn inserting_a_user_returns_201_with_assigned_id() {
    let app = test_app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/user",
            r#"{"name":"Ada Lovelace","address":"12 Analytical Way"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["address"], "12 Analytical Way");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn inserting_invalid_payload_returns_sorted_validation_errors() {
    let app = test_app();
    let resp = app
        .oneshot(json_request("POST", "/api/v1/user", r#"{"id":"u-1"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let body: Value = body_json(resp).await;
    assert_eq!(body["title"], "Bad Request on payload");
    assert_eq!(body["detail"], "Validation error on supplied payload");
    assert_eq!(body["errorCategory"], "Parameters");
    assert_eq!(body["instance"], "/api/v1/user");
    assert_eq!(
        body["errors"],
        serde_json::json!(["address: must not be blank", "name: must not be blank"])
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn inserting_blank_name_reports_only_that_field() {
    let app = test_app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/user",
            r#"{"name":"  ","address":"12 Analytical Way"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(
        body["errors"],
        serde_json::json!(["name: must not be blank"])
    );
}

#[tokio::test]
async fn retrieving_a_missing_user_returns_problem_detail() {
    let app = test_app();
    let resp = app
        .oneshot(get_request("/api/v1/user/ghost"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["detail"], "User with id=[ghost] not found");
    assert_eq!(body["type"], "/api/v1/user/ghost");
    assert_eq!(body["instance"], "/api/v1/user/ghost");
    assert_eq!(body["errorCategory"], "Generic");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn deleting_a_missing_user_returns_the_same_mapping() {
    let app = test_app();
    let resp = app
        .oneshot(common::bare_request("DELETE", "/api/v1/user/ghost"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["detail"], "User with id=[ghost] not found");
    assert_eq!(body["errorCategory"], "Generic");
}

#[tokio::test]
async fn updating_a_missing_user_returns_404() {
    let app = test_app();
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/api/v1/user",
            r#"{"id":"ghost","name":"Ada","address":"12 Analytical Way"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["detail"], "User with id=[ghost] not found");
}

#[tokio::test]
async fn updating_with_invalid_payload_returns_400() {
    let app = test_app();
    let resp = app
        .oneshot(json_request("PATCH", "/api/v1/user", r#"{"id":"u-1"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errorCategory"], "Parameters");
}

#[tokio::test]
async fn crud_lifecycle() {
    let app = test_app();

    // insert
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/user",
            r#"{"name":"Grace Hopper","address":"1 Navy Yard"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // retrieve one
    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/user/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["user"]["name"], "Grace Hopper");

    // list
    let resp = app.clone().oneshot(get_request("/api/v1/user")).await.unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["users"][0]["id"], id.as_str());

    // update echoes the submitted payload unchanged
    let payload = format!(r#"{{"id":"{id}","name":"Grace Hopper","address":"2 Harbor Dr"}}"#);
    let resp = app
        .clone()
        .oneshot(json_request("PATCH", "/api/v1/user", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["address"], "2 Harbor Dr");
    assert_eq!(body["id"], id.as_str());

    // delete returns boolean true
    let resp = app
        .clone()
        .oneshot(common::bare_request(
            "DELETE",
            &format!("/api/v1/user/{id}"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, Value::Bool(true));

    // retrieve after delete
    let resp = app
        .oneshot(get_request(&format!("/api/v1/user/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
