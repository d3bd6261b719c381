//! Booking entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{CalendarDate, EntityId};
use validator::Validate;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: EntityId,
    pub property_id: EntityId,
    pub user_id: EntityId,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub guests: i32,
    pub total_price: f64,
    pub is_paid: bool,
    pub payment_error_message: Option<String>,
}

/// Request body for `POST /api/bookings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub property_id: EntityId,
    pub user_id: EntityId,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    #[validate(range(min = 1))]
    pub guests: i32,
    pub total_price: f64,
    pub is_paid: bool,
    pub payment_error_message: Option<String>,
}

/// Request body for `PATCH /api/bookings/{id}`.
///
/// Ownership columns (`property_id`, `user_id`) are deliberately absent:
/// a booking cannot be moved to another property or user after creation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBooking {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    #[validate(range(min = 1))]
    pub guests: Option<i32>,
    pub total_price: Option<f64>,
    pub is_paid: Option<bool>,
    pub payment_error_message: Option<String>,
}

impl UpdateBooking {
    /// True when no recognized mutable field was supplied.
    pub fn is_noop(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.guests.is_none()
            && self.total_price.is_none()
            && self.is_paid.is_none()
            && self.payment_error_message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_noop() {
        assert!(UpdateBooking::default().is_noop());
    }

    #[test]
    fn paid_flag_alone_is_a_real_update() {
        let update = UpdateBooking {
            is_paid: Some(true),
            ..Default::default()
        };
        assert!(!update.is_noop());
    }

    #[test]
    fn zero_guests_fails_validation() {
        let update = UpdateBooking {
            guests: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
