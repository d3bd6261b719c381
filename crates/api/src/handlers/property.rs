//! Property listing, lookup and partial update.

use axum::extract::{Path, Query, State};
use validator::Validate;

use stayhub_core::error::DomainError;
use stayhub_core::types::EntityId;
use stayhub_db::models::property::{Property, PropertySearchParams, UpdateProperty};
use stayhub_db::models::search::RecordSearch;
use stayhub_db::repositories::{PropertyRepo, SearchRepo};
use stayhub_events::RealtimeEvent;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/properties`
///
/// Public search with conjunctive optional filters and clamped pagination.
/// Filtered searches are recorded for analytics on a detached task; a lost
/// record never affects the response.
pub async fn search_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertySearchParams>,
) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::search(&state.pool, &params).await?;

    if params.has_filters() {
        let record = RecordSearch {
            user_id: None,
            location: params.location.clone(),
            price_min: params.price_min,
            price_max: params.price_max,
            start_date: None,
            end_date: None,
            accommodation_type: params.accommodation_type.clone(),
            amenities: params.amenity_terms(),
        };
        let pool = state.pool.clone();
        tokio::spawn(async move {
            if let Err(e) = SearchRepo::record(&pool, &record).await {
                tracing::warn!(error = %e, "Failed to record search");
            }
        });
    }

    Ok(Json(properties))
}

/// `GET /api/properties/{id}`
pub async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<EntityId>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, property_id)
        .await?
        .ok_or(DomainError::PropertyNotFound)?;

    Ok(Json(property))
}

/// `PATCH /api/properties/{id}`
///
/// Host-only. The supplied fields form the update mask; an empty mask is
/// rejected rather than silently succeeding.
pub async fn update_property(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(property_id): Path<EntityId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    input.validate()?;

    let property = PropertyRepo::find_by_id(&state.pool, property_id)
        .await?
        .ok_or(DomainError::PropertyNotFound)?;

    if property.host_id != auth.user.id {
        return Err(DomainError::UnauthorizedUpdate("property").into());
    }

    if input.is_noop() {
        return Err(DomainError::NoUpdateFields.into());
    }

    let updated = PropertyRepo::update(&state.pool, property_id, &input)
        .await?
        .ok_or(DomainError::PropertyNotFound)?;

    tracing::info!(property_id = %updated.id, host_id = %auth.user.id, "Property updated");

    state.event_bus.publish(RealtimeEvent::broadcast(
        "property/update",
        serde_json::to_value(&updated).unwrap_or(serde_json::Value::Null),
    ));

    Ok(Json(updated))
}
