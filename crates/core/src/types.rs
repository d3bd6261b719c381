/// All entity primary keys are UUIDs assigned server-side at creation.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Booking date ranges are calendar dates without a time component.
pub type CalendarDate = chrono::NaiveDate;
