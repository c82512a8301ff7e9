//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::host::HostAddressProvider;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn HostAddressProvider>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Source of the server address attached to list responses.
    pub host: Arc<dyn HostAddressProvider>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `host` - Provider used to resolve this server's address
    pub fn new(db: DatabaseConnection, host: Arc<dyn HostAddressProvider>) -> Self {
        Self { db, host }
    }
}
