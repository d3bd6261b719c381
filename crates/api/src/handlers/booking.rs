//! Booking creation and partial update.

use axum::extract::{Path, State};
use validator::Validate;

use stayhub_core::error::DomainError;
use stayhub_core::types::EntityId;
use stayhub_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use stayhub_db::repositories::{BookingRepo, PropertyRepo};
use stayhub_events::RealtimeEvent;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `POST /api/bookings`
///
/// The date-range conflict check is inclusive on both ends: a booking
/// ending on a given day blocks another starting that same day. The check
/// and the insert are separate statements; the race window is accepted.
pub async fn create_booking(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<Json<Booking>> {
    input.validate()?;

    if PropertyRepo::find_by_id(&state.pool, input.property_id)
        .await?
        .is_none()
    {
        return Err(DomainError::PropertyNotFound.into());
    }

    if BookingRepo::has_conflict(&state.pool, input.property_id, input.start_date, input.end_date)
        .await?
    {
        return Err(DomainError::BookingConflict.into());
    }

    let booking = BookingRepo::create(&state.pool, &input).await?;

    tracing::info!(booking_id = %booking.id, property_id = %booking.property_id, "Booking created");

    state.event_bus.publish(RealtimeEvent::broadcast(
        "booking/update",
        serde_json::to_value(&booking).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(booking))
}

/// `PATCH /api/bookings/{id}`
///
/// Only the booking's owner may update it. Ownership columns are not part
/// of the update mask, so a booking can never be reassigned.
pub async fn update_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<EntityId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    input.validate()?;

    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(DomainError::BookingNotFound)?;

    if booking.user_id != auth.user.id {
        return Err(DomainError::UnauthorizedUpdate("booking").into());
    }

    if input.is_noop() {
        return Err(DomainError::NoUpdateFields.into());
    }

    let updated = BookingRepo::update(&state.pool, booking_id, &input)
        .await?
        .ok_or(DomainError::BookingNotFound)?;

    tracing::info!(booking_id = %updated.id, user_id = %auth.user.id, "Booking updated");

    state.event_bus.publish(RealtimeEvent::broadcast(
        "booking/update",
        serde_json::to_value(&updated).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(updated))
}
