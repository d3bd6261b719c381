pub mod auth;
pub mod bookings;
pub mod health;
pub mod messages;
pub mod properties;
pub mod reviews;
pub mod users;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::response::ErrorBody;
use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                      WebSocket (token in query string)
///
/// /auth/register           register (public)
/// /auth/login              login (public)
///
/// /users/{id}              get user (requires auth)
///
/// /properties              search (public)
/// /properties/{id}         get (public), update (requires auth, host only)
///
/// /bookings                create (requires auth)
/// /bookings/{id}           update (requires auth, owner only)
///
/// /reviews                 create (requires auth, completed stay required)
///
/// /messages                send (requires auth)
/// /messages/{id}           update (requires auth, sender only)
///
/// /health                  service + database health
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket endpoint.
        .route("/ws", get(ws::ws_handler))
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // User lookup.
        .nest("/users", users::router())
        // Property search, lookup, host update.
        .nest("/properties", properties::router())
        // Booking creation and owner update.
        .nest("/bookings", bookings::router())
        // Review creation.
        .nest("/reviews", reviews::router())
        // Messaging over REST.
        .nest("/messages", messages::router())
        // Health check.
        .merge(health::router())
        // Unmatched /api/* paths get a structured JSON 404 rather than the
        // SPA shell.
        .fallback(api_not_found)
}

/// Structured 404 for unknown API paths.
async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Endpoint not found", Some("NOT_FOUND"), None)),
    )
}
