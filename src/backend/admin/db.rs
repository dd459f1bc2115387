//! Store operations for admin reporting

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::backend::auth::users::User;
use crate::shared::admin::AdminStats;

/// Collect dashboard statistics in one transaction so the four counts
/// describe a single snapshot.
///
/// "Today" is the current UTC calendar day; the boundary is computed here
/// and bound as a parameter rather than evaluated inside SQL.
pub async fn admin_stats(pool: &SqlitePool) -> Result<AdminStats, sqlx::Error> {
    let day_start = Utc::now()
        .date_naive()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc();

    let mut tx = pool.begin().await?;

    let total_users: i64 = sqlx::query("SELECT COUNT(*) AS count FROM users")
        .fetch_one(&mut *tx)
        .await?
        .get("count");

    let new_users_today: i64 = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE created_at >= ?")
        .bind(day_start)
        .fetch_one(&mut *tx)
        .await?
        .get("count");

    let total_friendships: i64 =
        sqlx::query("SELECT COUNT(*) AS count FROM friendships WHERE status = 'accepted'")
            .fetch_one(&mut *tx)
            .await?
            .get("count");

    let total_messages: i64 = sqlx::query("SELECT COUNT(*) AS count FROM messages")
        .fetch_one(&mut *tx)
        .await?
        .get("count");

    tx.commit().await?;

    Ok(AdminStats {
        total_users,
        new_users_today,
        total_friendships,
        total_messages,
    })
}

/// Get every registered user, newest first.
pub async fn all_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, email, display_name, bio, interests,
               avatar_url, is_admin, created_at, last_login
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
