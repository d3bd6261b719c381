//! Route definitions for the `/messages` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST  /       -> send (requires auth)
/// PATCH /{id}   -> update (requires auth, sender only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(message::send_message))
        .route("/{message_id}", patch(message::update_message))
}
