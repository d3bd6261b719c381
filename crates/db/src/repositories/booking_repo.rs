//! Repository for the `bookings` table.

use sqlx::PgPool;
use stayhub_core::types::{CalendarDate, EntityId};
use uuid::Uuid;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, property_id, user_id, start_date, end_date, guests, \
                       total_price, is_paid, payment_error_message";

/// Provides CRUD and conflict-check operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking with a fresh id, returning the created row.
    ///
    /// Callers must run [`BookingRepo::has_conflict`] first; the check and
    /// the insert are separate statements, so two concurrent requests can
    /// both pass the check. This race window is accepted.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (id, property_id, user_id, start_date, end_date, guests,
                 total_price, is_paid, payment_error_message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(Uuid::new_v4())
            .bind(input.property_id)
            .bind(input.user_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.guests)
            .bind(input.total_price)
            .bind(input.is_paid)
            .bind(&input.payment_error_message)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Inclusive three-way overlap check against all existing bookings for
    /// a property: the new start inside an existing range, the new end
    /// inside an existing range, or an existing range fully inside the new
    /// one. Boundary days count as overlap. SQL mirror of
    /// [`stayhub_core::booking::ranges_overlap`].
    pub async fn has_conflict(
        pool: &PgPool,
        property_id: EntityId,
        start_date: CalendarDate,
        end_date: CalendarDate,
    ) -> Result<bool, sqlx::Error> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE property_id = $1
                  AND ((start_date <= $2 AND end_date >= $2)
                    OR (start_date <= $3 AND end_date >= $3)
                    OR (start_date >= $2 AND end_date <= $3))
             )",
        )
        .bind(property_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(pool)
        .await?;
        Ok(exists.0)
    }

    /// Check whether `user_id` holds a booking on `property_id` whose end
    /// date is strictly in the past. Gates review creation.
    pub async fn has_completed_stay(
        pool: &PgPool,
        property_id: EntityId,
        user_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE property_id = $1 AND user_id = $2 AND end_date < CURRENT_DATE
             )",
        )
        .bind(property_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists.0)
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                guests = COALESCE($4, guests),
                total_price = COALESCE($5, total_price),
                is_paid = COALESCE($6, is_paid),
                payment_error_message = COALESCE($7, payment_error_message)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.guests)
            .bind(input.total_price)
            .bind(input.is_paid)
            .bind(&input.payment_error_message)
            .fetch_optional(pool)
            .await
    }
}
