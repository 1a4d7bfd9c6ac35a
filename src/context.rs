// ABOUTME: Centralized resource container for dependency injection across route handlers
// ABOUTME: Holds the shared user service, todo provider, and configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Each router gets
//! the same `Arc<ServerResources>` as axum state, so shared resources are
//! constructed exactly once at startup.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::external::TodoProvider;
use crate::services::UserService;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// User persistence and identity lifecycle
    pub user_service: Arc<UserService>,
    /// Upstream todo access, trait object so tests can substitute a mock
    pub todo_client: Arc<dyn TodoProvider>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(
        user_service: Arc<UserService>,
        todo_client: Arc<dyn TodoProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            user_service,
            todo_client,
            config,
        }
    }
}
