//! Review creation.

use axum::extract::State;
use validator::Validate;

use stayhub_core::error::DomainError;
use stayhub_db::models::review::{CreateReview, Review};
use stayhub_db::repositories::{BookingRepo, ReviewRepo};
use stayhub_events::RealtimeEvent;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `POST /api/reviews`
///
/// Two gates before the insert: the reviewer must hold a booking on the
/// property whose end date is strictly in the past, and must not have
/// reviewed the property already.
pub async fn create_review(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;

    if !BookingRepo::has_completed_stay(&state.pool, input.property_id, input.user_id).await? {
        return Err(DomainError::NoCompletedBooking.into());
    }

    if ReviewRepo::exists_for_user_and_property(&state.pool, input.property_id, input.user_id)
        .await?
    {
        return Err(DomainError::ReviewAlreadyExists.into());
    }

    let review = ReviewRepo::create(&state.pool, &input, chrono::Utc::now()).await?;

    tracing::info!(review_id = %review.id, property_id = %review.property_id, "Review created");

    state.event_bus.publish(RealtimeEvent::broadcast(
        "review/add",
        serde_json::to_value(&review).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(review))
}
