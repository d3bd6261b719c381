use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;

use stayhub_core::error::DomainError;
use stayhub_db::models::message::SocketMessage;
use stayhub_db::models::user::PublicUser;
use stayhub_db::repositories::{MessageRepo, UserRepo};
use stayhub_events::RealtimeEvent;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::ws::frame::text_frame;

/// Handshake query parameters for `GET /api/ws`.
#[derive(Debug, Deserialize)]
pub struct WsAuthParams {
    pub token: Option<String>,
}

/// HTTP handler that authenticates the handshake and upgrades to WebSocket.
///
/// The credential is verified with the same logic as the REST auth gate and
/// resolved to a live user before the upgrade; a bad token is rejected with
/// the structured error response instead of an upgrade.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<WsAuthParams>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let token = params.token.ok_or(DomainError::TokenMissing)?;

    let claims =
        validate_token(&token, &state.config.jwt).map_err(|_| DomainError::TokenUnverifiable)?;

    let user = UserRepo::find_public_by_id(&state.pool, claims.sub)
        .await?
        .ok_or(DomainError::TokenUnknownUser)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user)))
}

/// Manage a single authenticated WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager` under the user's id,
///      which joins the user's private channel.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Processes inbound frames on the current task.
///   4. Cleans up on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState, user: PublicUser) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, user_id = %user.id, "WebSocket connected");

    // Register and get the receiver for outbound messages.
    let mut rx = state.ws_manager.add(conn_id.clone(), user.id).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: process inbound frames.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => {
                dispatch_frame(&state, &user, &conn_id, &text).await;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up: remove connection and abort sender task.
    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, user_id = %user.id, "WebSocket disconnected");
}

/// Inbound client frame: `{"event": ..., "data": ...}`.
#[derive(Debug, Deserialize)]
struct ClientFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Route one inbound Text frame. Failures are reported to the originating
/// connection as an `error` event; they never tear down the connection.
async fn dispatch_frame(state: &AppState, user: &PublicUser, conn_id: &str, text: &str) {
    let frame: ClientFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(_) => {
            send_error(state, conn_id, "Malformed frame").await;
            return;
        }
    };

    match frame.event.as_str() {
        "send_message" => {
            if let Err(e) = handle_send_message(state, user, conn_id, frame.data).await {
                tracing::warn!(conn_id = %conn_id, error = %e, "send_message failed");
                send_error(state, conn_id, "Failed to send message").await;
            }
        }
        other => {
            tracing::debug!(conn_id = %conn_id, event = %other, "Unknown client event");
            send_error(state, conn_id, "Unknown event").await;
        }
    }
}

/// Socket path of message sending.
///
/// The sender is always the authenticated connection user. The persisted
/// message is delivered to the recipient's private channel and echoed back
/// to the sender as a `message_sent` acknowledgment.
async fn handle_send_message(
    state: &AppState,
    user: &PublicUser,
    conn_id: &str,
    data: serde_json::Value,
) -> Result<(), AppError> {
    let input: SocketMessage = match serde_json::from_value(data) {
        Ok(input) => input,
        Err(_) => {
            send_error(state, conn_id, "Invalid message payload").await;
            return Ok(());
        }
    };

    if input.content.trim().is_empty() {
        send_error(state, conn_id, "Message content must not be empty").await;
        return Ok(());
    }

    if !UserRepo::exists(&state.pool, input.recipient_id).await? {
        send_error(state, conn_id, "Recipient not found").await;
        return Ok(());
    }

    let message = MessageRepo::create(
        &state.pool,
        user.id,
        input.recipient_id,
        input.property_id,
        &input.content,
        chrono::Utc::now(),
    )
    .await?;

    // Real-time delivery to the recipient's private channel.
    state.event_bus.publish(RealtimeEvent::to_user(
        message.recipient_id,
        "message/send",
        serde_json::to_value(&message).unwrap_or(serde_json::Value::Null),
    ));

    // Acknowledge to the originating connection only.
    state
        .ws_manager
        .send_to_conn(conn_id, text_frame("message_sent", &message))
        .await;

    Ok(())
}

/// Emit an `error` event to one connection.
async fn send_error(state: &AppState, conn_id: &str, message: &str) {
    state
        .ws_manager
        .send_to_conn(conn_id, text_frame("error", json!({ "message": message })))
        .await;
}
