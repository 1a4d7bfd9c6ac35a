// ABOUTME: Core data structures for users, todos, and response envelopes
// ABOUTME: Includes payload validation producing field-level error strings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Data models shared between the route handlers, the user service, and the
//! todo client.
//!
//! `User` is the locally-owned entity managed through full CRUD. `Todo` is an
//! external third-party record relayed read-only from the upstream service,
//! so its wire names stay camelCase.

use serde::{Deserialize, Serialize};

use crate::constants::error_messages::COLON_SPACE_DELIMITER;

/// Validation message for required string fields
const MUST_NOT_BE_BLANK: &str = "must not be blank";

/// A user registered in the system.
///
/// All fields are optional at the wire level; `validate` enforces the
/// required ones so a missing field produces an aggregated 400 rather than a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the service on insert when absent
    pub id: Option<String>,
    /// Display name, required
    pub name: Option<String>,
    /// Postal address, required
    pub address: Option<String>,
}

impl User {
    /// Validate the payload, returning one `"field: message"` string per
    /// violated constraint. An empty vector means the payload is acceptable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.push(format!("name{COLON_SPACE_DELIMITER}{MUST_NOT_BE_BLANK}"));
        }
        if self
            .address
            .as_deref()
            .map_or(true, |s| s.trim().is_empty())
        {
            errors.push(format!("address{COLON_SPACE_DELIMITER}{MUST_NOT_BE_BLANK}"));
        }

        errors
    }
}

/// A todo record sourced from the upstream JSONPlaceholder service.
///
/// Read-only from this system's perspective; relayed unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Identifier of the user owning the todo upstream
    pub user_id: u32,
    /// Todo identifier
    pub id: u32,
    /// Todo title
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// Envelope for the user listing endpoint: total count plus the records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersDataResponse {
    /// Number of users registered in the system
    pub count: usize,
    /// The registered users
    pub users: Vec<User>,
}

/// Envelope for the single-user retrieval endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataResponse {
    /// The requested user
    pub user: User,
}
