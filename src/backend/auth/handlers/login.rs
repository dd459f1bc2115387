//! Login Handler
//!
//! Implements POST /api/login.
//!
//! # Authentication Process
//!
//! 1. Look up user by username
//! 2. Verify password using bcrypt
//! 3. Record the login time
//! 4. Generate a JWT token
//!
//! # Security
//!
//! Unknown user and wrong password return the same `Unauthorized` error so
//! the endpoint does not leak which usernames exist.

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_username, touch_last_login};
use crate::backend::error::ApiError;
use crate::shared::user::{AuthResponse, LoginRequest, UserSummary};

/// Login handler
///
/// # Errors
///
/// * `Unauthorized` - unknown user or wrong password
/// * `Internal` - store failure or token generation failure
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("login request for: {}", request.username);

    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("user not found: {}", request.username);
            ApiError::unauthorized("invalid username or password")
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {:?}", e);
        ApiError::internal("password verification failed")
    })?;

    if !valid {
        tracing::warn!("invalid password for user: {}", request.username);
        return Err(ApiError::unauthorized("invalid username or password"));
    }

    touch_last_login(&pool, user.id).await?;

    let token = create_token(user.id, user.username.clone()).map_err(|e| {
        tracing::error!("failed to create token: {:?}", e);
        ApiError::internal("failed to create token")
    })?;

    tracing::info!("user logged in: {}", user.username);

    Ok(Json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}
