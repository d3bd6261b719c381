//! Repository for the `messages` table.

use sqlx::PgPool;
use stayhub_core::types::{EntityId, Timestamp};
use uuid::Uuid;

use crate::models::message::Message;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, sender_id, recipient_id, property_id, content, "timestamp""#;

/// Provides operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message with a server-assigned id and timestamp,
    /// returning the created row.
    pub async fn create(
        pool: &PgPool,
        sender_id: EntityId,
        recipient_id: EntityId,
        property_id: Option<EntityId>,
        content: &str,
        timestamp: Timestamp,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO messages (id, sender_id, recipient_id, property_id, content, "timestamp")
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(Uuid::new_v4())
            .bind(sender_id)
            .bind(recipient_id)
            .bind(property_id)
            .bind(content)
            .bind(timestamp)
            .fetch_one(pool)
            .await
    }

    /// Find a message by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the content of a message. Content is the only mutable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_content(
        pool: &PgPool,
        id: EntityId,
        content: &str,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET content = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }
}
