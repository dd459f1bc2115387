//! Admin Aggregation Types

use serde::{Deserialize, Serialize};

use crate::shared::user::UserProfile;

/// Read-only statistics over the whole store.
///
/// Computed from a single snapshot; `new_users_today` counts registrations
/// since midnight of the current UTC day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: i64,
    pub new_users_today: i64,
    /// Accepted friendship edges only
    pub total_friendships: i64,
    pub total_messages: i64,
}

/// Response for the admin user listing, most recently created first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUsersResponse {
    pub users: Vec<UserProfile>,
}
