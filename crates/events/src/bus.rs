//! Event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`RealtimeEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stayhub_core::types::EntityId;
use tokio::sync::broadcast;

/// Who an event should be delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Every connected client.
    Broadcast,
    /// All connections belonging to one user (their private channel).
    User(EntityId),
}

/// An entity-change event pushed to realtime clients.
///
/// `name` is the wire event name (e.g. `"property/update"`); `payload` is
/// the JSON body clients receive under the `data` key.
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeEvent {
    pub name: String,
    #[serde(skip)]
    pub audience: Audience,
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl RealtimeEvent {
    /// Event delivered to every connected client.
    pub fn broadcast(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            audience: Audience::Broadcast,
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Event delivered only to one user's connections.
    pub fn to_user(user_id: EntityId, name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            audience: Audience::User(user_id),
            payload,
            timestamp: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`RealtimeEvent`].
pub struct EventBus {
    sender: broadcast::Sender<RealtimeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed events are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// fire-and-forget is the delivery contract.
    pub fn publish(&self, event: RealtimeEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Create a new subscription receiving every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(RealtimeEvent::broadcast("property/update", json!({"id": 1})));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, "property/update");
        assert_eq!(event.audience, Audience::Broadcast);
        assert_eq!(event.payload, json!({"id": 1}));
    }

    #[tokio::test]
    async fn every_subscriber_sees_every_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(RealtimeEvent::broadcast("review/add", json!({})));

        assert_eq!(rx1.recv().await.unwrap().name, "review/add");
        assert_eq!(rx2.recv().await.unwrap().name, "review/add");
    }

    #[tokio::test]
    async fn user_targeted_event_carries_the_user_id() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let user_id = Uuid::new_v4();

        bus.publish(RealtimeEvent::to_user(
            user_id,
            "message/send",
            json!({"content": "hi"}),
        ));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.audience, Audience::User(user_id));
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = EventBus::default();
        // Must not panic or error.
        bus.publish(RealtimeEvent::broadcast("booking/update", json!({})));
    }
}
