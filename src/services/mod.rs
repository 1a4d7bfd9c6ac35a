// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Keeps persistence and identity lifecycle out of the HTTP surface
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Domain service layer
//!
//! Business logic extracted from route handlers. The handlers stay thin
//! delegation layers; identity assignment and storage live here.

/// User persistence and identity lifecycle
pub mod users;

pub use users::UserService;
