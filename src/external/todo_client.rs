// ABOUTME: JSONPlaceholder API client for relaying third-party todo records
// ABOUTME: Implements list and get-by-id retrieval plus a mock client for testing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! JSONPlaceholder Todo client
//!
//! This module provides a client for the JSONPlaceholder todos endpoint,
//! which this API relays unmodified. The service is free and requires no
//! authentication.
//!
//! # Features
//! - Todo listing (`GET /todos`)
//! - Single todo retrieval (`GET /todos/{id}`)
//! - Mock client for testing
//!
//! # API Reference
//! JSONPlaceholder: <https://jsonplaceholder.typicode.com/>

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::errors::AppError;
use crate::models::Todo;

/// Todo client configuration
#[derive(Debug, Clone)]
pub struct TodoClientConfig {
    /// Base URL for the upstream service (default: <https://jsonplaceholder.typicode.com>)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TodoClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Read access to the upstream todo collection.
///
/// The route layer depends on this trait rather than the concrete client so
/// tests can substitute a mock without touching the network.
#[async_trait]
pub trait TodoProvider: Send + Sync {
    /// Retrieve every todo the upstream service knows about
    async fn find_all(&self) -> Result<Vec<Todo>, AppError>;

    /// Retrieve a single todo by its upstream id
    async fn find_by_id(&self, id: u32) -> Result<Todo, AppError>;
}

/// JSONPlaceholder API client
pub struct TodoClient {
    config: TodoClientConfig,
    http_client: reqwest::Client,
}

impl TodoClient {
    /// Create a new client for the configured upstream
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(config: TodoClientConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TodoProvider for TodoClient {
    async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        let url = self.todos_url();
        let response = self.http_client.get(&url).send().await.map_err(|e| {
            AppError::external_service("JSONPlaceholder", e.to_string()).with_origin_url(&url)
        })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "JSONPlaceholder",
                format!("HTTP {}", response.status()),
            )
            .with_origin_url(url));
        }

        response.json().await.map_err(|e| {
            AppError::external_service("JSONPlaceholder", format!("JSON parse error: {e}"))
        })
    }

    async fn find_by_id(&self, id: u32) -> Result<Todo, AppError> {
        let url = format!("{}/{id}", self.todos_url());
        let response = self.http_client.get(&url).send().await.map_err(|e| {
            AppError::external_service("JSONPlaceholder", e.to_string()).with_origin_url(&url)
        })?;

        // An upstream 404 means the todo does not exist; everything else
        // non-2xx is an upstream fault.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Todo with id=[{id}] not found")));
        }
        if !response.status().is_success() {
            return Err(AppError::external_service(
                "JSONPlaceholder",
                format!("HTTP {}", response.status()),
            )
            .with_origin_url(url));
        }

        response.json().await.map_err(|e| {
            AppError::external_service("JSONPlaceholder", format!("JSON parse error: {e}"))
        })
    }
}

/// Mock todo client for testing (no API calls).
///
/// Seeds the same 200-item collection shape JSONPlaceholder serves, including
/// the exact record for id 200 asserted by the integration tests.
pub struct MockTodoClient {
    todos: BTreeMap<u32, Todo>,
}

impl MockTodoClient {
    /// Number of todos JSONPlaceholder serves
    pub const TODO_COUNT: u32 = 200;

    /// Create a mock client with the full seeded collection
    #[must_use]
    pub fn new() -> Self {
        let mut todos = BTreeMap::new();

        for id in 1..=Self::TODO_COUNT {
            // Upstream assigns 20 todos per user, users 1 through 10
            let user_id = (id - 1) / 20 + 1;
            todos.insert(
                id,
                Todo {
                    user_id,
                    id,
                    title: format!("todo item {id}"),
                    completed: id % 4 == 0,
                },
            );
        }

        // The record the upstream actually serves for id 200
        todos.insert(
            200,
            Todo {
                user_id: 10,
                id: 200,
                title: "ipsam aperiam voluptates qui".to_string(),
                completed: false,
            },
        );

        Self { todos }
    }
}

impl Default for MockTodoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoProvider for MockTodoClient {
    async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u32) -> Result<Todo, AppError> {
        self.todos
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Todo with id=[{id}] not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn todos_url_strips_trailing_slash() {
        let client = TodoClient::new(TodoClientConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..TodoClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.todos_url(), "http://localhost:3000/todos");
    }

    #[tokio::test]
    async fn mock_serves_two_hundred_todos() {
        let todos = MockTodoClient::new().find_all().await.unwrap();
        assert_eq!(todos.len(), 200);
    }

    #[tokio::test]
    async fn mock_serves_known_record_for_id_200() {
        let todo = MockTodoClient::new().find_by_id(200).await.unwrap();
        assert_eq!(todo.user_id, 10);
        assert_eq!(todo.title, "ipsam aperiam voluptates qui");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn mock_reports_missing_ids_as_not_found() {
        let err = MockTodoClient::new().find_by_id(201).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn mock_assigns_twenty_todos_per_user() {
        let todo = MockTodoClient::new().find_by_id(21).await.unwrap();
        assert_eq!(todo.user_id, 2);
    }
}
