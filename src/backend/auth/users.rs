//! User Model and Store Operations
//!
//! The `users` table is the reference relation for every other component.
//! Lookups return `Option` (absence is not an error); the username column
//! carries a UNIQUE constraint, so a lost registration race surfaces as a
//! unique violation rather than a duplicate row.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::user::{UserProfile, UserSummary};

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Email address
    pub email: String,
    /// Display name shown to other users
    pub display_name: String,
    /// Optional biography
    pub bio: Option<String>,
    /// Interests as a JSON array in a TEXT column
    pub interests: Option<String>,
    /// Optional avatar URL
    pub avatar_url: Option<String>,
    /// Admin flag
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful login, if any
    pub last_login: Option<DateTime<Utc>>,
}

const USER_COLUMNS: &str = "id, username, password_hash, email, display_name, bio, interests, avatar_url, is_admin, created_at, last_login";

/// Decode the stored interests JSON.
///
/// Absence or a parse failure yields an empty list, never an error.
pub fn parse_interests(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

impl User {
    /// Interests as a decoded list
    pub fn interest_list(&self) -> Vec<String> {
        parse_interests(self.interests.as_deref())
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let interests = user.interest_list();
        UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            interests,
            avatar_url: user.avatar_url,
            is_admin: user.is_admin,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Create a new user
///
/// The caller is responsible for hashing the password and pre-checking the
/// username; the UNIQUE constraint backs up the check under races.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    email: &str,
    display_name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, email, display_name, is_admin, created_at)
        VALUES (?, ?, ?, ?, ?, 0, ?)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(display_name)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        email: email.to_string(),
        display_name: display_name.to_string(),
        bio: None,
        interests: None,
        avatar_url: None,
        is_admin: false,
        created_at: now,
        last_login: None,
    })
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Set or clear the admin flag
pub async fn set_user_admin(
    pool: &SqlitePool,
    user_id: Uuid,
    is_admin: bool,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET is_admin = ? WHERE id = ?")
        .bind(is_admin)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Overwrite the mutable profile fields.
///
/// All four fields are written on every call; an absent value clears the
/// stored one. Callers relying on merge semantics must read-modify-write.
pub async fn update_user_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    display_name: &str,
    bio: Option<&str>,
    interests: &[String],
    avatar_url: Option<&str>,
) -> Result<(), sqlx::Error> {
    let interests_json = serde_json::to_string(interests).unwrap_or_else(|_| "[]".to_string());

    sqlx::query(
        r#"
        UPDATE users
        SET display_name = ?, bio = ?, interests = ?, avatar_url = ?
        WHERE id = ?
        "#,
    )
    .bind(display_name)
    .bind(bio)
    .bind(interests_json)
    .bind(avatar_url)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Record a successful login
pub async fn touch_last_login(pool: &SqlitePool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
