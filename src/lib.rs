// ABOUTME: Main library entry point for the starter REST API
// ABOUTME: Provides Todo proxying and User CRUD behind RFC 9457 problem-detail errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![deny(unsafe_code)]

//! # Starter API
//!
//! A REST API starter exposing two resource groups behind a shared global
//! error layer:
//!
//! - **Todos**: a read-only relay of the JSONPlaceholder todo collection
//! - **Users**: full CRUD over an in-process user service
//!
//! Errors raised anywhere in the request path are converted centrally into
//! RFC 9457 problem-detail responses with `errorCategory` and `timestamp`
//! extension properties; payload validation failures additionally carry a
//! sorted `errors` array.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starter_api::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Starter API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers organized by domain
//! - **Services**: user persistence and identity lifecycle
//! - **External**: the JSONPlaceholder todo client behind a provider trait
//! - **Errors**: the central error-to-HTTP mapping table
//! - **Config**: environment-based configuration management

/// Configuration management
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Focused dependency injection container
pub mod context;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External API clients (JSONPlaceholder)
pub mod external;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data structures for users and todos
pub mod models;

/// HTTP routes organized by domain
pub mod routes;

/// HTTP server assembly and bootstrap
pub mod server;

/// Domain service layer
pub mod services;
