// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for monitoring infrastructure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Health check routes for service monitoring
//!
//! This module provides health and readiness endpoints for monitoring and
//! load balancer health checks. Both report the same shape, a status label
//! plus the time of the check.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::constants::routes;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route(routes::HEALTH, get(|| async { Self::status("healthy") }))
            .route(routes::READY, get(|| async { Self::status("ready") }))
    }

    fn status(label: &'static str) -> Json<Value> {
        Json(json!({
            "status": label,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_carries_label_and_timestamp() {
        let Json(body) = HealthRoutes::status("healthy");
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }
}
