// ABOUTME: In-memory user service providing count, retrieval, insert, update, and delete
// ABOUTME: Owns identity assignment for newly inserted users
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! User service
//!
//! Owns the user collection and its identity lifecycle. The store is an
//! in-process map behind a `tokio` `RwLock`; the route handlers never touch
//! storage directly.

use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;

/// In-memory user store.
///
/// Keyed by user id in a `BTreeMap` so `retrieve_all` returns a stable
/// ordering across calls.
#[derive(Debug, Default)]
pub struct UserService {
    users: RwLock<BTreeMap<String, User>>,
}

impl UserService {
    /// Create an empty service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users registered in the system
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Retrieve all registered users
    pub async fn retrieve_all(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    /// Retrieve one user by id, `None` when absent
    pub async fn retrieve(&self, user_id: &str) -> Option<User> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Insert a new user, assigning a fresh id when the payload carries none.
    /// Returns the record as stored.
    pub async fn insert(&self, mut user: User) -> User {
        let id = user
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        user.id = Some(id.clone());

        self.users.write().await.insert(id, user.clone());
        user
    }

    /// Replace an existing user. Returns `false` when no record with the
    /// payload's id exists (including payloads with no id at all).
    pub async fn update(&self, user: User) -> bool {
        let Some(id) = user.id.clone() else {
            return false;
        };

        let mut users = self.users.write().await;
        if users.contains_key(&id) {
            users.insert(id, user);
            true
        } else {
            false
        }
    }

    /// Remove a user by id. Returns `false` when absent.
    pub async fn delete(&self, user_id: &str) -> bool {
        self.users.write().await.remove(user_id).is_some()
    }
}
