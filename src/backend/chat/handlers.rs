//! Messaging Handlers
//!
//! Sending enforces the friendship gate loudly (`Forbidden`); retrieval
//! enforces it silently, returning an empty list for a private conversation
//! the caller is not entitled to read. Group conversations are open to any
//! authenticated user.

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::chat::db;
use crate::backend::error::ApiError;
use crate::backend::friends::db::check_friend_status;
use crate::backend::middleware::AuthUser;
use crate::shared::friendship::FriendStatus;
use crate::shared::message::{
    ChatType, ListMessagesParams, ListMessagesResponse, SendMessageRequest, SendMessageResponse,
};

const DEFAULT_MESSAGE_LIMIT: i64 = 50;
const MAX_MESSAGE_LIMIT: i64 = 500;

/// Send message handler
///
/// # Errors
///
/// * `BadRequest` - empty content, unknown chat type, or malformed recipient ID
/// * `NotFound` - private recipient does not exist
/// * `Forbidden` - private recipient is not a friend
pub async fn send_message(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::bad_request("message content must not be empty"));
    }

    let chat_type = ChatType::from_str(&request.chat_type)
        .ok_or_else(|| ApiError::bad_request("chat type must be 'private' or 'group'"))?;

    let target_id = match chat_type {
        ChatType::Private => {
            let recipient_id = Uuid::parse_str(&request.target_id)
                .map_err(|_| ApiError::bad_request("recipient must be a valid user id"))?;

            get_user_by_id(&pool, recipient_id)
                .await?
                .ok_or_else(|| ApiError::not_found("recipient not found"))?;

            let status = check_friend_status(&pool, caller.user_id, recipient_id).await?;
            if status != FriendStatus::Friends {
                tracing::warn!(
                    "user {} tried to message non-friend {}",
                    caller.user_id,
                    recipient_id
                );
                return Err(ApiError::forbidden(
                    "private messages can only be sent to friends",
                ));
            }

            // Normalized form so retrieval string-matches reliably.
            recipient_id.to_string()
        }
        ChatType::Group => {
            if request.target_id.trim().is_empty() {
                return Err(ApiError::bad_request("group id must not be empty"));
            }
            request.target_id.clone()
        }
    };

    let message_id =
        db::create_message(&pool, caller.user_id, &request.content, chat_type, &target_id).await?;

    tracing::info!(
        "message {} sent by {} to {} chat {}",
        message_id,
        caller.user_id,
        chat_type.as_str(),
        target_id
    );

    Ok(Json(SendMessageResponse { message_id }))
}

/// List messages handler
///
/// # Errors
///
/// * `BadRequest` - unknown chat type or malformed peer ID
pub async fn list_messages(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Query(params): Query<ListMessagesParams>,
) -> Result<Json<ListMessagesResponse>, ApiError> {
    let chat_type = ChatType::from_str(&params.chat_type)
        .ok_or_else(|| ApiError::bad_request("chat type must be 'private' or 'group'"))?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_MESSAGE_LIMIT)
        .clamp(1, MAX_MESSAGE_LIMIT);

    let messages = match chat_type {
        ChatType::Private => {
            let peer_id = Uuid::parse_str(&params.target_id)
                .map_err(|_| ApiError::bad_request("peer must be a valid user id"))?;

            let status = check_friend_status(&pool, caller.user_id, peer_id).await?;
            if status != FriendStatus::Friends {
                // Non-friends see an empty conversation, not an error.
                return Ok(Json(ListMessagesResponse { messages: vec![] }));
            }

            db::private_messages(&pool, caller.user_id, peer_id, limit).await?
        }
        ChatType::Group => db::group_messages(&pool, &params.target_id, limit).await?,
    };

    Ok(Json(ListMessagesResponse { messages }))
}
