//! Repository for the `reviews` table.

use sqlx::PgPool;
use stayhub_core::types::{EntityId, Timestamp};
use uuid::Uuid;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, property_id, user_id, rating, comment, created_at";

/// Provides operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review with a fresh id, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReview,
        created_at: Timestamp,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (id, property_id, user_id, rating, comment, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(Uuid::new_v4())
            .bind(input.property_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Check whether `user_id` has already reviewed `property_id`.
    pub async fn exists_for_user_and_property(
        pool: &PgPool,
        property_id: EntityId,
        user_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM reviews WHERE property_id = $1 AND user_id = $2
             )",
        )
        .bind(property_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists.0)
    }
}
