//! WebSocket infrastructure for real-time communication.
//!
//! Provides connection management, heartbeat monitoring, the JSON wire-frame
//! helper, and the authenticated HTTP upgrade handler used by Axum routes.

mod frame;
mod handler;
mod heartbeat;
pub mod manager;

pub use frame::text_frame;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
