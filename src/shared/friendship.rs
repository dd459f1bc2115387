//! Friendship Data Structures
//!
//! Friend requests, friendship edges, and the tri-state relationship
//! between two users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relationship between two users.
///
/// Resolution order is authoritative: an accepted friendship edge wins,
/// then any request row in either direction reads as pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FriendStatus {
    /// No relationship
    None,
    /// A friend request exists in either direction
    Pending,
    /// An accepted friendship edge exists
    Friends,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendStatus::None => "none",
            FriendStatus::Pending => "pending",
            FriendStatus::Friends => "friends",
        }
    }
}

/// Status of a friend request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FriendRequestStatus {
    /// Request is pending
    Pending,
    /// Request was accepted
    Accepted,
}

impl Default for FriendRequestStatus {
    fn default() -> Self {
        FriendRequestStatus::Pending
    }
}

impl FriendRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendRequestStatus::Pending => "pending",
            FriendRequestStatus::Accepted => "accepted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(FriendRequestStatus::Pending),
            "accepted" => Some(FriendRequestStatus::Accepted),
            _ => None,
        }
    }
}

/// Represents a friend request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendRequest {
    /// Unique request ID
    pub id: Uuid,
    /// User who sent the request
    pub from_user_id: Uuid,
    /// User who received the request
    pub to_user_id: Uuid,
    /// Current status of the request
    #[serde(default)]
    pub status: FriendRequestStatus,
    /// When the request was created
    pub created_at: DateTime<Utc>,
}

impl FriendRequest {
    /// Check if the request is pending
    pub fn is_pending(&self) -> bool {
        self.status == FriendRequestStatus::Pending
    }
}

/// A pending request joined with the requester's display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingFriendRequest {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub from_username: String,
    pub from_display_name: String,
    pub status: FriendRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Request to send a friend request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendFriendRequestRequest {
    /// ID of the user to send the request to
    pub to_user_id: Uuid,
}

/// Response after sending a friend request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendFriendRequestResponse {
    pub request_id: Uuid,
}

/// Response for listing pending friend requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFriendRequestsResponse {
    pub requests: Vec<PendingFriendRequest>,
}

/// Response for listing a user's friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<crate::shared::user::UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_status_round_trip() {
        for status in [FriendRequestStatus::Pending, FriendRequestStatus::Accepted] {
            assert_eq!(FriendRequestStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(FriendRequestStatus::from_str("rejected"), None);
    }

    #[test]
    fn test_friend_status_labels() {
        assert_eq!(FriendStatus::None.as_str(), "none");
        assert_eq!(FriendStatus::Pending.as_str(), "pending");
        assert_eq!(FriendStatus::Friends.as_str(), "friends");
    }
}
