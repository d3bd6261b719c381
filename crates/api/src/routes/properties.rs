//! Route definitions for the `/properties` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET   /       -> search (public)
/// GET   /{id}   -> get (public)
/// PATCH /{id}   -> update (requires auth, host only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::search_properties))
        .route("/{property_id}", get(property::get_property))
        .route("/{property_id}", patch(property::update_property))
}
