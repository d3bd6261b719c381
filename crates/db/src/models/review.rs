//! Review entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{EntityId, Timestamp};
use validator::Validate;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: EntityId,
    pub property_id: EntityId,
    pub user_id: EntityId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/reviews`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReview {
    pub property_id: EntityId,
    pub user_id: EntityId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comment: Option<String>,
}
