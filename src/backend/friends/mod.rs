//! Friendship Graph
//!
//! Tri-state relationship resolution (none/pending/friends) and the friend
//! request lifecycle.

pub mod db;
pub mod handlers;

pub use handlers::{accept_friend_request, list_friend_requests, list_friends, send_friend_request};
