//! Admin
//!
//! Dashboard statistics and the full user roster, gated on the `is_admin`
//! flag.

pub mod db;
pub mod handlers;

pub use handlers::{get_dashboard, list_all_users};
