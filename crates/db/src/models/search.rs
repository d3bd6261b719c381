//! Search record model.
//!
//! Searches are recorded for analytics only; nothing reads them back to
//! drive results.

use serde::Serialize;
use sqlx::FromRow;
use stayhub_core::types::{CalendarDate, EntityId, Timestamp};

/// A row from the `searches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchRecord {
    pub id: EntityId,
    pub user_id: Option<EntityId>,
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub accommodation_type: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub created_at: Timestamp,
}

/// DTO for recording a search.
#[derive(Debug, Clone, Default)]
pub struct RecordSearch {
    pub user_id: Option<EntityId>,
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub accommodation_type: Option<String>,
    pub amenities: Option<Vec<String>>,
}
