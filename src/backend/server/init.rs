//! Server Initialization
//!
//! Builds the Axum application: loads the database pool, creates the
//! application state, and configures the router.

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Loads the database pool from the environment, runs migrations, and
/// returns a router ready to serve requests.
pub async fn create_app() -> Result<Router<()>, sqlx::Error> {
    tracing::info!("initializing studypulse backend server");

    let pool = load_database().await?;

    Ok(build_app(pool))
}

/// Build the application router around an existing pool.
///
/// Split out from [`create_app`] so tests can inject an in-memory pool.
pub fn build_app(pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(pool);
    create_router(app_state)
}
