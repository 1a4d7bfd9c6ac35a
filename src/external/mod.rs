// ABOUTME: External API clients consumed by the route handlers
// ABOUTME: Currently the JSONPlaceholder todo service client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! External API clients

/// JSONPlaceholder todo service client
pub mod todo_client;

pub use todo_client::{MockTodoClient, TodoClient, TodoClientConfig, TodoProvider};
