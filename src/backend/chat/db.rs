//! Store operations for messages
//!
//! One table holds both conversation kinds, discriminated by `chat_type`.
//! For private messages `target_id` is the recipient's ID rendered as a
//! lowercase hyphenated UUID string; for group messages it is an opaque
//! room name. Retrieval always joins the sender's display fields.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::message::{ChatMessage, ChatType};

/// Store a message. Returns the new message ID.
pub async fn create_message(
    pool: &SqlitePool,
    sender_id: Uuid,
    content: &str,
    chat_type: ChatType,
    target_id: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO messages (id, sender_id, content, chat_type, target_id, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(content)
    .bind(chat_type.as_str())
    .bind(target_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Get the private conversation between two users, newest first.
///
/// A private row belongs to the conversation when one party is the sender
/// and the other is the target, in either direction.
pub async fn private_messages(
    pool: &SqlitePool,
    caller_id: Uuid,
    peer_id: Uuid,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT m.id, m.sender_id, m.content, m.chat_type, m.target_id, m.created_at,
               u.username AS sender_username, u.display_name AS sender_display_name
        FROM messages m
        JOIN users u ON m.sender_id = u.id
        WHERE m.chat_type = 'private'
          AND ((m.sender_id = ? AND m.target_id = ?) OR (m.sender_id = ? AND m.target_id = ?))
        ORDER BY m.created_at DESC
        LIMIT ?
        "#,
    )
    .bind(caller_id)
    .bind(peer_id.to_string())
    .bind(peer_id)
    .bind(caller_id.to_string())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_message).collect())
}

/// Get a group conversation, newest first.
pub async fn group_messages(
    pool: &SqlitePool,
    group_id: &str,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT m.id, m.sender_id, m.content, m.chat_type, m.target_id, m.created_at,
               u.username AS sender_username, u.display_name AS sender_display_name
        FROM messages m
        JOIN users u ON m.sender_id = u.id
        WHERE m.chat_type = 'group' AND m.target_id = ?
        ORDER BY m.created_at DESC
        LIMIT ?
        "#,
    )
    .bind(group_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_message).collect())
}

fn row_to_message(row: sqlx::sqlite::SqliteRow) -> ChatMessage {
    ChatMessage {
        id: row.get("id"),
        sender_id: row.get("sender_id"),
        sender_username: row.get("sender_username"),
        sender_display_name: row.get("sender_display_name"),
        content: row.get("content"),
        chat_type: ChatType::from_str(row.get::<String, _>("chat_type").as_str())
            .unwrap_or(ChatType::Private),
        target_id: row.get("target_id"),
        created_at: row.get("created_at"),
    }
}
