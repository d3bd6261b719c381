//! Message sending and editing over REST.
//!
//! The socket path of message sending lives in `crate::ws::handler`; both
//! paths persist through the same repository and publish the same
//! `message/send` event name.

use axum::extract::{Path, State};
use validator::Validate;

use stayhub_core::error::DomainError;
use stayhub_core::types::EntityId;
use stayhub_db::models::message::{CreateMessage, Message, UpdateMessage};
use stayhub_db::repositories::{MessageRepo, UserRepo};
use stayhub_events::RealtimeEvent;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `POST /api/messages`
///
/// The payload carries `sender_id`, which must match the authenticated
/// caller. Delivery is targeted: only the recipient's connections receive
/// the `message/send` event.
pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<Json<Message>> {
    input.validate()?;

    if input.sender_id != auth.user.id {
        return Err(DomainError::UnauthorizedSender.into());
    }

    if !UserRepo::exists(&state.pool, input.recipient_id).await? {
        return Err(DomainError::RecipientNotFound.into());
    }

    let message = MessageRepo::create(
        &state.pool,
        input.sender_id,
        input.recipient_id,
        input.property_id,
        &input.content,
        chrono::Utc::now(),
    )
    .await?;

    tracing::info!(
        message_id = %message.id,
        recipient_id = %message.recipient_id,
        "Message sent"
    );

    state.event_bus.publish(RealtimeEvent::to_user(
        message.recipient_id,
        "message/send",
        serde_json::to_value(&message).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(message))
}

/// `PATCH /api/messages/{id}`
///
/// Sender-only, content-only. The resulting `message/send` event is
/// broadcast to every connection rather than scoped to the conversation;
/// replicated from the source system and flagged in DESIGN.md.
pub async fn update_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(message_id): Path<EntityId>,
    Json(input): Json<UpdateMessage>,
) -> AppResult<Json<Message>> {
    input.validate()?;

    let message = MessageRepo::find_by_id(&state.pool, message_id)
        .await?
        .ok_or(DomainError::MessageNotFound)?;

    if message.sender_id != auth.user.id {
        return Err(DomainError::UnauthorizedUpdate("message").into());
    }

    let content = input.content.as_deref().ok_or(DomainError::NoUpdateFields)?;

    let updated = MessageRepo::update_content(&state.pool, message_id, content)
        .await?
        .ok_or(DomainError::MessageNotFound)?;

    tracing::info!(message_id = %updated.id, sender_id = %auth.user.id, "Message updated");

    state.event_bus.publish(RealtimeEvent::broadcast(
        "message/send",
        serde_json::to_value(&updated).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(updated))
}
