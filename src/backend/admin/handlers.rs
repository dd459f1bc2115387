//! Admin Handlers
//!
//! Both endpoints re-check the `is_admin` flag against the store on every
//! call, so revoking admin takes effect immediately even for tokens issued
//! while the flag was set.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::admin::db;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::{AuthUser, AuthenticatedUser};
use crate::shared::admin::{AdminStats, AdminUsersResponse};
use crate::shared::user::UserProfile;

async fn require_admin(pool: &SqlitePool, caller: &AuthenticatedUser) -> Result<(), ApiError> {
    let user = get_user_by_id(pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid or expired token"))?;

    if !user.is_admin {
        tracing::warn!("non-admin user {} hit an admin endpoint", caller.user_id);
        return Err(ApiError::forbidden("admin access required"));
    }

    Ok(())
}

/// Admin dashboard handler
///
/// # Errors
///
/// * `Forbidden` - caller is not an admin
pub async fn get_dashboard(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<AdminStats>, ApiError> {
    require_admin(&pool, &caller).await?;

    let stats = db::admin_stats(&pool).await?;

    Ok(Json(stats))
}

/// Admin user roster handler
///
/// # Errors
///
/// * `Forbidden` - caller is not an admin
pub async fn list_all_users(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<AdminUsersResponse>, ApiError> {
    require_admin(&pool, &caller).await?;

    let users = db::all_users(&pool)
        .await?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    Ok(Json(AdminUsersResponse { users }))
}
