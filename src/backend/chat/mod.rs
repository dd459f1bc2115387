//! Messaging
//!
//! Private (friend-to-friend) and group conversations over one message
//! store, with friendship-gated access on the private side.

pub mod db;
pub mod handlers;

pub use handlers::{list_messages, send_message};
