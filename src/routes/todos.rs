// ABOUTME: Todo relay route handlers forwarding to the external JSONPlaceholder client
// ABOUTME: Pure proxy, returning upstream records unmodified
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Todo relay routes
//!
//! Pure pass-through to the configured [`crate::external::TodoProvider`].
//! No business logic lives here; upstream failures surface through the
//! central error layer.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::{constants::routes, context::ServerResources, errors::AppError};

/// Todo relay routes
pub struct TodoRoutes;

impl TodoRoutes {
    /// Create all todo relay routes under `/api/v1/todos`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::TODOS_BASE, get(Self::handle_find_all))
            .route(
                &format!("{}/:id", routes::TODOS_BASE),
                get(Self::handle_find_by_id),
            )
            .with_state(resources)
    }

    /// Handle `GET /api/v1/todos`: the upstream collection, unmodified
    async fn handle_find_all(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
    ) -> Result<Response, AppError> {
        info!("Retrieving todo list");

        let todos = resources
            .todo_client
            .find_all()
            .await
            .map_err(|e| e.with_instance(uri.path()))?;

        Ok((StatusCode::OK, Json(todos)).into_response())
    }

    /// Handle `GET /api/v1/todos/{id}`: one upstream record by id
    async fn handle_find_by_id(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
        Path(id): Path<u32>,
    ) -> Result<Response, AppError> {
        info!(todo_id = %id, "Retrieving todo");

        let todo = resources
            .todo_client
            .find_by_id(id)
            .await
            .map_err(|e| e.with_instance(uri.path()))?;

        Ok((StatusCode::OK, Json(todo)).into_response())
    }
}
