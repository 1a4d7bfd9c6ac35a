// ABOUTME: Route module organization for the starter API HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Route module for the starter API
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the service layer or the external todo client; error translation
//! happens centrally in [`crate::errors`].

/// Health check and system status routes
pub mod health;
/// Todo relay routes backed by the external JSONPlaceholder client
pub mod todos;
/// User CRUD routes backed by the user service
pub mod users;

/// Health check route handlers
pub use health::HealthRoutes;
/// Todo relay route handlers
pub use todos::TodoRoutes;
/// User CRUD route handlers
pub use users::UserRoutes;
