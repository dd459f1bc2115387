//! Store operations for the friendship graph
//!
//! Friendships are encoded in two relations: `friend_requests` rows track
//! the lifecycle, `friendships` rows are the undirected accepted edges.
//! [`accept_friend_request`] is the one place both are written, inside a
//! single transaction, so readers never observe one without the other.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::friendship::{
    FriendRequest, FriendRequestStatus, FriendStatus, PendingFriendRequest,
};

const USER_COLUMNS: &str = "u.id, u.username, u.password_hash, u.email, u.display_name, u.bio, u.interests, u.avatar_url, u.is_admin, u.created_at, u.last_login";

/// Resolve the relationship between two users.
///
/// An accepted friendship edge (in either orientation) wins; otherwise any
/// friend request row between the pair, in either direction and regardless
/// of its status, reads as pending. This ordering is authoritative: the
/// accept transaction keeps the two tables consistent.
pub async fn check_friend_status(
    pool: &SqlitePool,
    user1_id: Uuid,
    user2_id: Uuid,
) -> Result<FriendStatus, sqlx::Error> {
    let edge = sqlx::query(
        r#"
        SELECT id FROM friendships
        WHERE status = 'accepted'
          AND ((user1_id = ? AND user2_id = ?) OR (user1_id = ? AND user2_id = ?))
        "#,
    )
    .bind(user1_id)
    .bind(user2_id)
    .bind(user2_id)
    .bind(user1_id)
    .fetch_optional(pool)
    .await?;

    if edge.is_some() {
        return Ok(FriendStatus::Friends);
    }

    let request = sqlx::query(
        r#"
        SELECT id FROM friend_requests
        WHERE (from_user_id = ? AND to_user_id = ?) OR (from_user_id = ? AND to_user_id = ?)
        "#,
    )
    .bind(user1_id)
    .bind(user2_id)
    .bind(user2_id)
    .bind(user1_id)
    .fetch_optional(pool)
    .await?;

    if request.is_some() {
        Ok(FriendStatus::Pending)
    } else {
        Ok(FriendStatus::None)
    }
}

/// Create a new friend request.
///
/// The caller must have verified the pair status is `none`; the canonical
/// unordered-pair unique index backs that check up, so a lost race surfaces
/// as a unique violation.
pub async fn create_friend_request(
    pool: &SqlitePool,
    from_user_id: Uuid,
    to_user_id: Uuid,
) -> Result<FriendRequest, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO friend_requests (id, from_user_id, to_user_id, status, created_at)
        VALUES (?, ?, ?, 'pending', ?)
        "#,
    )
    .bind(id)
    .bind(from_user_id)
    .bind(to_user_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(FriendRequest {
        id,
        from_user_id,
        to_user_id,
        status: FriendRequestStatus::Pending,
        created_at: now,
    })
}

/// Get a friend request by ID
pub async fn get_friend_request(
    pool: &SqlitePool,
    request_id: Uuid,
) -> Result<Option<FriendRequest>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, from_user_id, to_user_id, status, created_at
        FROM friend_requests
        WHERE id = ?
        "#,
    )
    .bind(request_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| FriendRequest {
        id: r.get("id"),
        from_user_id: r.get("from_user_id"),
        to_user_id: r.get("to_user_id"),
        status: FriendRequestStatus::from_str(r.get::<String, _>("status").as_str())
            .unwrap_or(FriendRequestStatus::Pending),
        created_at: r.get("created_at"),
    }))
}

/// Get pending friend requests addressed to a user, oldest first,
/// joined with the requester's display fields.
pub async fn pending_requests_for(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<PendingFriendRequest>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT fr.id, fr.from_user_id, fr.to_user_id, fr.status, fr.created_at,
               u.username AS from_username, u.display_name AS from_display_name
        FROM friend_requests fr
        JOIN users u ON fr.from_user_id = u.id
        WHERE fr.to_user_id = ? AND fr.status = 'pending'
        ORDER BY fr.created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| PendingFriendRequest {
            id: row.get("id"),
            from_user_id: row.get("from_user_id"),
            to_user_id: row.get("to_user_id"),
            from_username: row.get("from_username"),
            from_display_name: row.get("from_display_name"),
            status: FriendRequestStatus::from_str(row.get::<String, _>("status").as_str())
                .unwrap_or(FriendRequestStatus::Pending),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Accept a friend request.
///
/// Inserts the accepted friendship edge and flips the request status in a
/// single transaction: both happen or neither does, so `check_friend_status`
/// can never observe the edge without the accepted request or vice versa.
///
/// Returns `Ok(None)` if the request does not exist.
pub async fn accept_friend_request(
    pool: &SqlitePool,
    request_id: Uuid,
) -> Result<Option<FriendRequest>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        r#"
        SELECT id, from_user_id, to_user_id, status, created_at
        FROM friend_requests
        WHERE id = ?
        "#,
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let from_user_id: Uuid = row.get("from_user_id");
    let to_user_id: Uuid = row.get("to_user_id");
    let created_at = row.get("created_at");

    let edge_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO friendships (id, user1_id, user2_id, status, created_at)
        VALUES (?, ?, ?, 'accepted', ?)
        "#,
    )
    .bind(edge_id)
    .bind(from_user_id)
    .bind(to_user_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE friend_requests SET status = 'accepted' WHERE id = ?")
        .bind(request_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Some(FriendRequest {
        id: request_id,
        from_user_id,
        to_user_id,
        status: FriendRequestStatus::Accepted,
        created_at,
    }))
}

/// Get a user's friends: both edge orientations, excluding the user,
/// accepted edges only.
pub async fn friends_of(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS} FROM users u
        JOIN friendships f ON (u.id = f.user1_id OR u.id = f.user2_id)
        WHERE (f.user1_id = ? OR f.user2_id = ?)
          AND u.id != ?
          AND f.status = 'accepted'
        ORDER BY u.username ASC
        "#
    ))
    .bind(user_id)
    .bind(user_id)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
