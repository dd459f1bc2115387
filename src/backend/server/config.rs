//! Server Configuration
//!
//! Loads the SQLite connection pool from the environment and runs
//! migrations on startup. The store is mandatory: every operation goes
//! through the pool, so a connection failure aborts startup instead of
//! degrading silently.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default database file used when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:studypulse.db";

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL` from the environment (defaulting to a local SQLite
/// file), creates the pool, and runs migrations.
///
/// # Errors
///
/// Returns the underlying sqlx error if the pool cannot be created or a
/// migration fails.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("connecting to database");

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("database connection pool created");

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("database migrations completed");

    Ok(pool)
}
