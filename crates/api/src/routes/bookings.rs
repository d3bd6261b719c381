//! Route definitions for the `/bookings` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST  /       -> create (requires auth)
/// PATCH /{id}   -> update (requires auth, owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(booking::create_booking))
        .route("/{booking_id}", patch(booking::update_booking))
}
