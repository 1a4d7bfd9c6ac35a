// ABOUTME: Unified error handling with standard error codes and problem-detail HTTP responses
// ABOUTME: Maps domain errors to RFC 9457 bodies with category and timestamp extensions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling layer for the starter
//! API. It defines standard error codes, the `AppError` type raised by
//! services and clients, and the RFC 9457 problem-detail formatting applied
//! when an error escapes a route handler.
//!
//! The mapping is a pure lookup from error kind to response shape:
//!
//! - internal errors surface as HTTP 500 with the message as a plain-text body
//! - missing resources surface as HTTP 404 problem-detail
//!   (`errorCategory = "Generic"`)
//! - payload validation failures surface as HTTP 400 problem-detail
//!   (`errorCategory = "Parameters"`) with a sorted `errors` array

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{error_categories, error_messages, error_titles};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input failed payload validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// The requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// An upstream service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Configuration loading or parsing failed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// An unclassified internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            ErrorCode::InvalidInput => 400,

            // 404 Not Found
            ErrorCode::ResourceNotFound => 404,

            // 502 Bad Gateway
            ErrorCode::ExternalServiceError => 502,

            // 500 Internal Server Error
            ErrorCode::InternalError | ErrorCode::ConfigError => 500,
        }
    }

    /// Problem-detail category extension for this error
    #[must_use]
    pub const fn error_category(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => error_categories::PARAMETERS,
            _ => error_categories::GENERIC,
        }
    }

    /// Problem-detail title for this error
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => error_titles::BAD_REQUEST_ON_PAYLOAD,
            ErrorCode::ResourceNotFound => error_titles::NOT_FOUND,
            other => StatusCode::from_u16(other.http_status())
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Internal Server Error"),
        }
    }

    /// Whether this code maps to a plain-text HTTP 500 body rather than a
    /// problem-detail payload
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::InternalError | ErrorCode::ConfigError)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request path that triggered the error, used for `type`/`instance`
    pub instance: Option<String>,
    /// Origin URL for errors raised against downstream services
    pub origin_url: Option<String>,
    /// Aggregated `"field: message"` validation errors, sorted
    pub errors: Vec<String>,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the request path used for the problem-detail `type`/`instance`
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.context.instance = Some(instance.into());
        self
    }

    /// Attach the downstream URL that raised the error
    #[must_use]
    pub fn with_origin_url(mut self, url: impl Into<String>) -> Self {
        self.context.origin_url = Some(url.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for the error kinds the handlers raise
impl AppError {
    /// Resource not found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// User with the given id does not exist; formats the canonical
    /// `User with id=[<id>] not found` detail message
    #[must_use]
    pub fn user_not_found(user_id: &str) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!(
                "{}{user_id}{}",
                error_messages::USER_WITH_ID,
                error_messages::NOT_FOUND_SUFFIX
            ),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Payload validation failure carrying per-field errors; the list is
    /// sorted lexicographically before it reaches the response body
    #[must_use]
    pub fn validation(mut errors: Vec<String>) -> Self {
        errors.sort();
        let mut err = Self::new(
            ErrorCode::InvalidInput,
            error_titles::VALIDATION_ERROR_ON_SUPPLIED_PAYLOAD,
        );
        err.context.errors = errors;
        err
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

/// Conversion from `anyhow::Error` for boundary code
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::new(ErrorCode::InternalError, error.to_string())
    }
}

/// RFC 9457 problem-detail response body with the two extension properties
/// this API carries on every structured error (`errorCategory`, `timestamp`)
/// plus an optional sorted `errors` array for validation failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemDetail {
    /// Problem type URI; mirrors the request path
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short human-readable summary of the problem type
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
    /// URI of the specific occurrence; mirrors the request path
    pub instance: String,
    /// Extension: `Generic` or `Parameters`
    #[serde(rename = "errorCategory")]
    pub error_category: String,
    /// Extension: time the error response was produced
    pub timestamp: DateTime<Utc>,
    /// Extension: sorted `"field: message"` strings for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<&AppError> for ProblemDetail {
    fn from(error: &AppError) -> Self {
        let instance = error
            .context
            .instance
            .clone()
            .unwrap_or_else(|| "about:blank".to_string());

        Self {
            type_uri: instance.clone(),
            title: error.code.title().to_string(),
            status: error.code.http_status(),
            detail: error.message.clone(),
            instance,
            error_category: error.code.error_category().to_string(),
            timestamp: Utc::now(),
            errors: if error.context.errors.is_empty() {
                None
            } else {
                Some(error.context.errors.clone())
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Internal errors keep the original contract: status 500 with the
        // bare message as a plain-text body.
        if self.code.is_internal() {
            return (status, self.message).into_response();
        }

        let problem = ProblemDetail::from(&self);
        let mut response = (status, Json(problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
