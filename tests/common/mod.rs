//! Shared test fixtures
//!
//! Every test gets its own in-memory SQLite database with the full schema
//! applied. The pool is capped at one connection: each `sqlite::memory:`
//! connection is a separate database, so a larger pool would scatter state.

#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use studypulse::backend::auth::users::{create_user, User};
use studypulse::backend::friends::db::{accept_friend_request, create_friend_request};
use studypulse::backend::middleware::AuthenticatedUser;

/// Low bcrypt cost keeps the test suite fast; never use outside tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Insert a user with a real bcrypt hash of `password`.
pub async fn seed_user(pool: &SqlitePool, username: &str, password: &str) -> User {
    let hash = bcrypt::hash(password, TEST_BCRYPT_COST).expect("bcrypt hash failed");
    create_user(
        pool,
        username,
        &hash,
        &format!("{username}@example.com"),
        &format!("{username} display"),
    )
    .await
    .expect("failed to seed user")
}

/// Establish an accepted friendship between two users.
pub async fn befriend(pool: &SqlitePool, a: Uuid, b: Uuid) {
    let request = create_friend_request(pool, a, b)
        .await
        .expect("failed to create friend request");
    accept_friend_request(pool, request.id)
        .await
        .expect("failed to accept friend request")
        .expect("friend request vanished");
}

/// Caller identity as the auth middleware would attach it.
pub fn identity(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user.id,
        username: user.username.clone(),
    }
}
