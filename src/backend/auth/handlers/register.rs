//! Registration Handler
//!
//! Implements POST /api/register.
//!
//! # Registration Process
//!
//! 1. Validate username format, email, and password length
//! 2. Check the username is not already taken
//! 3. Hash the password with bcrypt
//! 4. Create the user
//!
//! # Security
//!
//! Passwords are hashed with bcrypt at `DEFAULT_COST` and never stored or
//! logged in raw form.

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::backend::auth::users::{create_user, get_user_by_username};
use crate::backend::error::ApiError;
use crate::shared::user::{RegisterRequest, RegisterResponse};

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub(crate) fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration handler
///
/// # Errors
///
/// * `BadRequest` - invalid username, email, or password
/// * `Conflict` - username already taken (pre-check, backed by the UNIQUE
///   constraint under races)
/// * `Internal` - hashing or store failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!("registration request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        tracing::warn!("invalid username format: {}", request.username);
        return Err(ApiError::bad_request(
            "username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("invalid email format: {}", request.email);
        return Err(ApiError::bad_request("invalid email format"));
    }

    if request.password.len() < 8 {
        tracing::warn!("password too short");
        return Err(ApiError::bad_request(
            "password must be at least 8 characters",
        ));
    }

    if request.display_name.trim().is_empty() {
        return Err(ApiError::bad_request("display name must not be empty"));
    }

    // Pre-check; the UNIQUE constraint converts the race into a Conflict.
    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("username already exists: {}", request.username);
        return Err(ApiError::conflict("username already taken"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {:?}", e);
        ApiError::internal("failed to hash password")
    })?;

    let user = create_user(
        &pool,
        &request.username,
        &password_hash,
        &request.email,
        &request.display_name,
    )
    .await?;

    tracing::info!("user created: {} ({})", user.username, user.id);

    Ok(Json(RegisterResponse { id: user.id }))
}
