/**
 * Message Store
 *
 * Database operations for direct messages. Same storage discipline as the
 * account store: UUIDs as TEXT, timestamps as RFC 3339 TEXT.
 */

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::ApiError;
use crate::messaging::model::Message;

/// Handle for message reads and writes
#[derive(Clone)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    /// Wrap a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a message from `sender` to `receiver`
    ///
    /// The body is required; an empty or whitespace-only body is rejected
    /// before anything is written.
    pub async fn create(
        &self,
        sender: Uuid,
        receiver: Uuid,
        body: &str,
    ) -> Result<Message, ApiError> {
        if body.trim().is_empty() {
            return Err(ApiError::invalid_input("Message text is required"));
        }

        let message = Message::new(sender, receiver, body.to_string());

        sqlx::query(
            "INSERT INTO messages (id, sender_id, receiver_id, body, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.sender_id.to_string())
        .bind(message.receiver_id.to_string())
        .bind(&message.body)
        .bind(message.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(ApiError::from)?;

        Ok(message)
    }

    /// Messages exchanged between two accounts, oldest first
    ///
    /// Includes both directions, so this is the full conversation view.
    pub async fn between(&self, a: Uuid, b: Uuid) -> Result<Vec<Message>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, sender_id, receiver_id, body, created_at
             FROM messages
             WHERE (sender_id = ? AND receiver_id = ?)
                OR (sender_id = ? AND receiver_id = ?)
             ORDER BY created_at ASC, id ASC",
        )
        .bind(a.to_string())
        .bind(b.to_string())
        .bind(b.to_string())
        .bind(a.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Message {
                id: parse_uuid(&row.get::<String, _>("id")),
                sender_id: parse_uuid(&row.get::<String, _>("sender_id")),
                receiver_id: parse_uuid(&row.get::<String, _>("receiver_id")),
                body: row.get("body"),
                created_at: parse_timestamp(&row.get::<String, _>("created_at")),
            })
            .collect())
    }
}

fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap_or_default()
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
