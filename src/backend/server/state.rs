//! Application State Management
//!
//! `AppState` is the central state container for the Axum application. The
//! only shared state is the SQLite connection pool; each operation acquires
//! a connection (or transaction) from the pool for its own scope and
//! releases it on every path, including errors.
//!
//! The `FromRef` implementation lets handlers extract `State<SqlitePool>`
//! directly instead of taking the whole `AppState`.

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
