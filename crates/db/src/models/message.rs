//! Message entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{EntityId, Timestamp};
use validator::Validate;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: EntityId,
    pub sender_id: EntityId,
    pub recipient_id: EntityId,
    pub property_id: Option<EntityId>,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Request body for `POST /api/messages`.
///
/// `sender_id` is carried in the payload and must match the authenticated
/// caller; the handler rejects any mismatch.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessage {
    pub sender_id: EntityId,
    pub recipient_id: EntityId,
    pub property_id: Option<EntityId>,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Payload of the client-emitted `send_message` socket frame. The sender is
/// taken from the authenticated connection, never from the payload.
#[derive(Debug, Deserialize)]
pub struct SocketMessage {
    pub recipient_id: EntityId,
    pub property_id: Option<EntityId>,
    pub content: String,
}

/// Request body for `PATCH /api/messages/{id}`. Content is the only mutable
/// column of a message.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMessage {
    #[validate(length(min = 1))]
    pub content: Option<String>,
}

impl UpdateMessage {
    /// True when no recognized mutable field was supplied.
    pub fn is_noop(&self) -> bool {
        self.content.is_none()
    }
}
