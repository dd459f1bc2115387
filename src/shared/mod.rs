//! Shared Types
//!
//! Request/response DTOs and domain enums used by the HTTP handlers.

pub mod admin;
pub mod friendship;
pub mod message;
pub mod user;

pub use admin::AdminStats;
pub use friendship::{FriendRequest, FriendRequestStatus, FriendStatus};
pub use message::{ChatMessage, ChatType};
pub use user::{UserProfile, UserSummary};
