//! Profile Update Handler
//!
//! Implements PUT /api/profile. Updates are full overwrites: all four
//! mutable fields are written on every call, and an omitted field clears
//! the stored value. Clients wanting merge semantics must send the full
//! profile back.

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::update_user_profile;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::shared::user::UpdateProfileRequest;

/// Profile update handler
///
/// # Errors
///
/// * `BadRequest` - empty display name
/// * `Internal` - store failure
pub async fn update_profile(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ApiError> {
    if request.display_name.trim().is_empty() {
        return Err(ApiError::bad_request("display name must not be empty"));
    }

    update_user_profile(
        &pool,
        caller.user_id,
        &request.display_name,
        request.bio.as_deref(),
        &request.interests,
        request.avatar_url.as_deref(),
    )
    .await?;

    tracing::info!("profile updated for user: {}", caller.user_id);

    Ok(StatusCode::NO_CONTENT)
}
