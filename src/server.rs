// ABOUTME: HTTP server assembly combining all domain routers behind shared middleware
// ABOUTME: Binds the listener and serves the axum application
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! HTTP server assembly
//!
//! Builds the complete axum router from the per-domain route modules and
//! serves it. The router constructor is public so integration tests can
//! drive the full application without a network listener.

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::context::ServerResources;
use crate::routes::{HealthRoutes, TodoRoutes, UserRoutes};

/// Build the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(UserRoutes::routes(resources.clone()))
        .merge(TodoRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the starter API
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server around the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the configured port and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server exits
    /// abnormally
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!("HTTP server listening on {addr}");

        axum::serve(listener, router(self.resources))
            .await
            .context("HTTP server terminated unexpectedly")
    }
}
