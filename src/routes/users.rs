// ABOUTME: User CRUD route handlers delegating persistence to the user service
// ABOUTME: Raises not-found and validation errors handled by the central error layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! User management routes
//!
//! Stateless delegation layer over [`crate::services::UserService`]. Each
//! handler logs intent, calls the service, and translates an absent record
//! into the canonical not-found error. Payload validation runs before any
//! write and aggregates per-field errors into a single 400 problem-detail.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    constants::routes,
    context::ServerResources,
    errors::AppError,
    models::{User, UserDataResponse, UsersDataResponse},
};

/// User management routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user CRUD routes under `/api/v1/user`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let by_id = format!("{}/:user_id", routes::USER_BASE);
        Router::new()
            .route(routes::USER_BASE, get(Self::handle_retrieve_users))
            .route(routes::USER_BASE, post(Self::handle_insert_user))
            .route(routes::USER_BASE, patch(Self::handle_update_user))
            .route(&by_id, get(Self::handle_retrieve_user))
            .route(&by_id, delete(Self::handle_delete_user))
            .with_state(resources)
    }

    /// Validate a user payload, converting field errors into the aggregated
    /// 400 problem-detail error
    fn validate_payload(user: &User, instance: &str) -> Result<(), AppError> {
        let errors = user.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors).with_instance(instance))
        }
    }

    /// Handle `GET /api/v1/user`: every registered user plus the total count
    async fn handle_retrieve_users(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        info!("Retrieving all users");

        let response = UsersDataResponse {
            count: resources.user_service.count().await,
            users: resources.user_service.retrieve_all().await,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle `GET /api/v1/user/{userId}`
    async fn handle_retrieve_user(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        info!(user_id = %user_id, "Retrieving user");

        let user = resources
            .user_service
            .retrieve(&user_id)
            .await
            .ok_or_else(|| AppError::user_not_found(&user_id).with_instance(uri.path()))?;

        Ok((StatusCode::OK, Json(UserDataResponse { user })).into_response())
    }

    /// Handle `POST /api/v1/user`: insert a new record, 201 with the stored
    /// record (id assigned when the payload carried none)
    async fn handle_insert_user(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
        Json(user): Json<User>,
    ) -> Result<Response, AppError> {
        info!(payload = ?user, "Inserting user");

        Self::validate_payload(&user, uri.path())?;
        let inserted = resources.user_service.insert(user).await;

        Ok((StatusCode::CREATED, Json(inserted)).into_response())
    }

    /// Handle `PATCH /api/v1/user`: replace an existing record, echoing the
    /// submitted payload on success
    async fn handle_update_user(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
        Json(user): Json<User>,
    ) -> Result<Response, AppError> {
        info!(payload = ?user, "Updating user");

        Self::validate_payload(&user, uri.path())?;

        if !resources.user_service.update(user.clone()).await {
            let user_id = user.id.clone().unwrap_or_default();
            return Err(AppError::user_not_found(&user_id).with_instance(uri.path()));
        }

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle `DELETE /api/v1/user/{userId}`: 200 with `true` when removed
    async fn handle_delete_user(
        State(resources): State<Arc<ServerResources>>,
        OriginalUri(uri): OriginalUri,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        info!(user_id = %user_id, "Deleting user");

        if !resources.user_service.delete(&user_id).await {
            return Err(AppError::user_not_found(&user_id).with_instance(uri.path()));
        }

        Ok((StatusCode::OK, Json(true)).into_response())
    }
}
