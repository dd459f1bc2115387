//! User Data Transfer Types
//!
//! Request and response shapes for registration, login, and profiles.
//! None of these carry the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars, letter first, alphanumeric + underscore)
    pub username: String,
    /// Password (hashed before storage, never stored raw)
    pub password: String,
    /// Email address
    pub email: String,
    /// Display name shown to other users
    pub display_name: String,
}

/// Registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// ID of the newly created user
    pub id: Uuid,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: bearer token plus a summary of the authenticated user
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT bearer token (30-day expiration)
    pub token: String,
    pub user: UserSummary,
}

/// Compact user summary returned by login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Full user profile (everything except the credential)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Profile update request.
///
/// Updates overwrite all four mutable fields on every call: a field omitted
/// from the request clears the stored value rather than keeping it.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_omitted_fields_default_to_empty() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"display_name":"X"}"#).unwrap();
        assert_eq!(request.display_name, "X");
        assert_eq!(request.bio, None);
        assert!(request.interests.is_empty());
        assert_eq!(request.avatar_url, None);
    }

    #[test]
    fn test_update_profile_full_round_trip() {
        let request: UpdateProfileRequest = serde_json::from_str(
            r#"{"display_name":"Alice","bio":"hi","interests":["rust","chess"],"avatar_url":"http://a/b.png"}"#,
        )
        .unwrap();
        assert_eq!(request.bio.as_deref(), Some("hi"));
        assert_eq!(request.interests, vec!["rust", "chess"]);
    }
}
