//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::model::user::DevUser;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply, as both fields
/// are reference-counted internally) for each incoming request via Axum's
/// state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Shared across all requests; clones share the underlying pool.
    pub db: DatabaseConnection,

    /// Built-in development users for the in-memory authentication fallback.
    ///
    /// Hashed once at startup and read-only afterwards, so sharing the list
    /// across requests needs no synchronization.
    pub dev_users: Arc<Vec<DevUser>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `dev_users` - Built-in development users with pre-hashed passwords
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, dev_users: Arc<Vec<DevUser>>) -> Self {
        Self { db, dev_users }
    }
}
