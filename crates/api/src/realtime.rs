//! Event fan-out: bridges the [`EventBus`](stayhub_events::EventBus) to
//! connected WebSocket clients.
//!
//! Handlers publish [`RealtimeEvent`]s; this task subscribes to the bus and
//! pushes each event either to every connection or to one user's private
//! channel. At-most-once: lagged or disconnected receivers simply miss
//! events, there is no replay or retry.

use std::sync::Arc;

use stayhub_events::{Audience, RealtimeEvent};
use tokio::sync::broadcast;

use crate::ws::{text_frame, WsManager};

/// Routes published events to WebSocket connections.
pub struct EventFanout {
    ws_manager: Arc<WsManager>,
}

impl EventFanout {
    /// Create a new fan-out with the given WebSocket manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main fan-out loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](stayhub_events::EventBus) is dropped during shutdown).
    pub async fn run(self, mut receiver: broadcast::Receiver<RealtimeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.deliver(event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event fan-out lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, fan-out shutting down");
                    break;
                }
            }
        }
    }

    /// Push a single event to its audience.
    async fn deliver(&self, event: RealtimeEvent) {
        let message = text_frame(&event.name, &event.payload);
        match event.audience {
            Audience::Broadcast => {
                self.ws_manager.broadcast(message).await;
            }
            Audience::User(user_id) => {
                let delivered = self.ws_manager.send_to_user(user_id, message).await;
                tracing::debug!(
                    event = %event.name,
                    user_id = %user_id,
                    delivered,
                    "Targeted event delivered"
                );
            }
        }
    }
}
