//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each request handler
//! through Axum's state extraction. It holds the connection pool and nothing else: every
//! read is a fresh round trip, there is no in-process result cache.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool; clones share the same pool, so cloning
/// the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide connection pool.
    ///
    /// Handlers borrow it for the duration of a request; a connection (or transaction)
    /// checked out from it is returned on every exit path when dropped.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
