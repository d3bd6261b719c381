//! Property entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::EntityId;
use validator::Validate;

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub host_id: EntityId,
    pub description: Option<String>,
    pub accommodation_type: String,
    pub amenities: Option<Vec<String>>,
    pub price: f64,
    pub images: Option<serde_json::Value>,
}

/// DTO for inserting a property. There is no public create endpoint; this is
/// used by host tooling and test fixtures.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProperty {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub host_id: EntityId,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub accommodation_type: String,
    pub amenities: Option<Vec<String>>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub images: Option<serde_json::Value>,
}

/// Request body for `PATCH /api/properties/{id}`.
///
/// The set of `Some` fields is the field mask; columns outside this struct
/// can never be touched by a partial update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProperty {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub accommodation_type: Option<String>,
    pub amenities: Option<Vec<String>>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    pub images: Option<serde_json::Value>,
}

impl UpdateProperty {
    /// True when no recognized mutable field was supplied.
    pub fn is_noop(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.accommodation_type.is_none()
            && self.amenities.is_none()
            && self.price.is_none()
            && self.images.is_none()
    }
}

/// Sort column for property search results.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertySortBy {
    Name,
    #[default]
    Price,
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Query parameters for `GET /api/properties`.
///
/// All filters are optional and conjunctive. `amenities` arrives as a
/// comma-separated list because query strings carry no array structure.
#[derive(Debug, Default, Deserialize)]
pub struct PropertySearchParams {
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub accommodation_type: Option<String>,
    pub amenities: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub sort_by: PropertySortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl PropertySearchParams {
    /// Split the comma-separated `amenities` filter into terms, dropping
    /// empty segments. Returns `None` when the filter is absent or empty.
    pub fn amenity_terms(&self) -> Option<Vec<String>> {
        let raw = self.amenities.as_deref()?;
        let terms: Vec<String> = raw
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            None
        } else {
            Some(terms)
        }
    }

    /// True when at least one filter field was supplied.
    pub fn has_filters(&self) -> bool {
        self.location.is_some()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.accommodation_type.is_some()
            || self.amenity_terms().is_some()
    }
}
