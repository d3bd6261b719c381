//! Repository for the `searches` table (analytics-only).

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::search::RecordSearch;

/// Records property searches. Rows are never read back to drive results.
pub struct SearchRepo;

impl SearchRepo {
    /// Insert a search record. Callers treat failures as non-fatal and only
    /// log them; a lost analytics row must never fail a search request.
    pub async fn record(pool: &PgPool, input: &RecordSearch) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO searches
                (id, user_id, location, price_min, price_max, start_date, end_date,
                 accommodation_type, amenities, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())",
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(&input.location)
        .bind(input.price_min)
        .bind(input.price_max)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.accommodation_type)
        .bind(&input.amenities)
        .execute(pool)
        .await?;
        Ok(())
    }
}
