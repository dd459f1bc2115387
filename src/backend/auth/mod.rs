//! Authentication and User Store
//!
//! User records and store operations, JWT session tokens, and the HTTP
//! handlers for registration, login, and profiles.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{get_me, login, register, update_profile};
