//! Shared application state.

use sea_orm::DatabaseConnection;

/// State handed to every request handler through axum's `State` extractor.
///
/// Built once at startup. Cloning is cheap: `DatabaseConnection` is a handle
/// onto a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
