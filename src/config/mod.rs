// ABOUTME: Configuration module grouping environment-based settings
// ABOUTME: Exposes the server configuration loaded from environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Configuration management

/// Environment-based configuration management
pub mod environment;
