//! Chat Message Data Structures
//!
//! Messages carry an opaque `target_id`: a user ID for private chats, a
//! group identifier for group chats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of conversation a message belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    /// Direct message between two friends
    Private,
    /// Open group chat identified by an opaque group ID
    Group,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Private => "private",
            ChatType::Group => "group",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "private" => Some(ChatType::Private),
            "group" => Some(ChatType::Group),
            _ => None,
        }
    }
}

/// A stored message joined with the sender's display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_username: String,
    pub sender_display_name: String,
    pub content: String,
    pub chat_type: ChatType,
    pub target_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request to send a message.
///
/// `chat_type` arrives as a raw string so that an unknown value maps to a
/// bad-request error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    pub chat_type: String,
    pub target_id: String,
}

/// Response after sending a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message_id: Uuid,
}

/// Query parameters for listing messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesParams {
    pub chat_type: String,
    pub target_id: String,
    /// Maximum number of messages to return (default 50)
    pub limit: Option<i64>,
}

/// Response for listing messages, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<ChatMessage>,
}
