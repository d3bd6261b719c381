//! Booking date-range rules.
//!
//! The conflict check executed in SQL by the booking repository implements
//! the same inclusive three-way overlap test as [`ranges_overlap`]; the
//! predicate lives here so the rule is unit-testable without a database.

use crate::types::CalendarDate;

/// Inclusive three-way overlap test between a requested `[new_start, new_end]`
/// range and an existing `[start, end]` range.
///
/// Two ranges conflict when any of the following holds:
/// - the new start falls inside the existing range,
/// - the new end falls inside the existing range,
/// - the existing range lies fully inside the new range.
///
/// Boundaries count as overlap: a booking ending on the day another starts
/// still conflicts.
pub fn ranges_overlap(
    new_start: CalendarDate,
    new_end: CalendarDate,
    start: CalendarDate,
    end: CalendarDate,
) -> bool {
    (start <= new_start && end >= new_start)
        || (start <= new_end && end >= new_end)
        || (start >= new_start && end <= new_end)
}
