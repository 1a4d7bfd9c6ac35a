// ABOUTME: Application constants organized by domain for error handling and HTTP surface
// ABOUTME: Centralizes problem-detail categories, titles, and message fragments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Constants module
//!
//! Application constants grouped by domain. Error titles and categories are
//! shared between the error layer and the integration tests so the wire
//! contract lives in exactly one place.

/// Service identity used in logs and startup banners
pub mod service {
    /// Service name for structured logging
    pub const NAME: &str = "starter-api";
}

/// Problem-detail error categories (the `errorCategory` extension property)
pub mod error_categories {
    /// Category for generic, non-parameter failures
    pub const GENERIC: &str = "Generic";
    /// Category for payload/parameter validation failures
    pub const PARAMETERS: &str = "Parameters";
}

/// Problem-detail titles
pub mod error_titles {
    /// Title for payload validation failures
    pub const BAD_REQUEST_ON_PAYLOAD: &str = "Bad Request on payload";
    /// Title for missing resources
    pub const NOT_FOUND: &str = "Not Found";
    /// Detail line accompanying payload validation failures
    pub const VALIDATION_ERROR_ON_SUPPLIED_PAYLOAD: &str = "Validation error on supplied payload";
}

/// Message fragments for domain errors
pub mod error_messages {
    /// Prefix for the user-not-found detail message
    pub const USER_WITH_ID: &str = "User with id=[";
    /// Suffix for the user-not-found detail message
    pub const NOT_FOUND_SUFFIX: &str = "] not found";
    /// Delimiter between a field name and its validation message
    pub const COLON_SPACE_DELIMITER: &str = ": ";
}

/// HTTP route paths
pub mod routes {
    /// Base path for the user resource
    pub const USER_BASE: &str = "/api/v1/user";
    /// Base path for the todo resource
    pub const TODOS_BASE: &str = "/api/v1/todos";
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Default ports and upstream endpoints
pub mod defaults {
    /// Default HTTP listen port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default base URL of the upstream todo service
    pub const DEFAULT_TODO_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
}
