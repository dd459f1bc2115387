//! Friendship Handlers
//!
//! HTTP surface for the friendship graph: list friends, send a request,
//! list incoming pending requests, and accept a request.

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::friends::db;
use crate::backend::middleware::AuthUser;
use crate::shared::friendship::{
    FriendRequest, FriendStatus, FriendsResponse, ListFriendRequestsResponse,
    SendFriendRequestRequest, SendFriendRequestResponse,
};
use crate::shared::user::UserProfile;

/// List friends handler
///
/// Returns the caller's friends as full profiles, ordered by username.
pub async fn list_friends(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<FriendsResponse>, ApiError> {
    let friends = db::friends_of(&pool, caller.user_id)
        .await?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    Ok(Json(FriendsResponse { friends }))
}

/// Send friend request handler
///
/// # Errors
///
/// * `BadRequest` - recipient is the caller
/// * `NotFound` - recipient does not exist
/// * `Conflict` - a request or friendship already exists between the pair
pub async fn send_friend_request(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Json(request): Json<SendFriendRequestRequest>,
) -> Result<Json<SendFriendRequestResponse>, ApiError> {
    if request.to_user_id == caller.user_id {
        return Err(ApiError::bad_request(
            "cannot send a friend request to yourself",
        ));
    }

    get_user_by_id(&pool, request.to_user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let status = db::check_friend_status(&pool, caller.user_id, request.to_user_id).await?;
    match status {
        FriendStatus::Friends => {
            return Err(ApiError::conflict("already friends"));
        }
        FriendStatus::Pending => {
            return Err(ApiError::conflict("friend request already exists"));
        }
        FriendStatus::None => {}
    }

    let created = db::create_friend_request(&pool, caller.user_id, request.to_user_id).await?;

    tracing::info!(
        "friend request {} sent from {} to {}",
        created.id,
        caller.user_id,
        request.to_user_id
    );

    Ok(Json(SendFriendRequestResponse {
        request_id: created.id,
    }))
}

/// List pending friend requests handler
///
/// Only requests addressed *to* the caller appear; requests the caller sent
/// are not listed.
pub async fn list_friend_requests(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<ListFriendRequestsResponse>, ApiError> {
    let requests = db::pending_requests_for(&pool, caller.user_id).await?;

    Ok(Json(ListFriendRequestsResponse { requests }))
}

/// Accept friend request handler
///
/// # Errors
///
/// * `NotFound` - no such request
/// * `Forbidden` - caller is not the recipient
/// * `Conflict` - request already accepted
pub async fn accept_friend_request(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<FriendRequest>, ApiError> {
    let request = db::get_friend_request(&pool, request_id)
        .await?
        .ok_or_else(|| ApiError::not_found("friend request not found"))?;

    if request.to_user_id != caller.user_id {
        tracing::warn!(
            "user {} tried to accept friend request {} addressed to {}",
            caller.user_id,
            request_id,
            request.to_user_id
        );
        return Err(ApiError::forbidden(
            "only the recipient can accept a friend request",
        ));
    }

    if !request.is_pending() {
        return Err(ApiError::conflict("friend request is not pending"));
    }

    let accepted = db::accept_friend_request(&pool, request_id)
        .await?
        .ok_or_else(|| ApiError::not_found("friend request not found"))?;

    tracing::info!(
        "friend request {} accepted: {} and {} are now friends",
        request_id,
        accepted.from_user_id,
        accepted.to_user_id
    );

    Ok(Json(accepted))
}
