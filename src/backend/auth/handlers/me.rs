//! Current-User Profile Handler
//!
//! Implements GET /api/profile: returns the caller's own profile, without
//! the credential.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::shared::user::UserProfile;

/// Get current user handler
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = get_user_by_id(&pool, caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("user not found: {}", caller.user_id);
            ApiError::not_found("user not found")
        })?;

    Ok(Json(UserProfile::from(user)))
}
