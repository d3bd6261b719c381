//! In-process realtime event bus.
//!
//! Handlers publish [`RealtimeEvent`]s; the api crate's fan-out task
//! subscribes and pushes each event to the matching WebSocket connections.
//! Delivery is at-most-once with no replay or acknowledgment.

pub mod bus;

pub use bus::{Audience, EventBus, RealtimeEvent};
