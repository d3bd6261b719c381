//! Health check route.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use stayhub_core::types::Timestamp;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status; degrades when the database is unreachable.
    pub status: &'static str,
    /// Server time at the moment of the check.
    pub timestamp: Timestamp,
}

/// GET /health -- returns service status backed by a database liveness probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = stayhub_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes (merged into the `/api` tree).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
