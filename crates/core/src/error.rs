//! Domain error taxonomy with stable wire error codes.
//!
//! Each variant maps to exactly one machine-readable `error_code` string that
//! clients match on. HTTP status mapping lives in the api crate; this module
//! knows nothing about HTTP.

/// A domain-level failure produced by handlers and the auth gate.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Access token required")]
    TokenMissing,

    /// The credential failed signature/expiry verification.
    #[error("Invalid or expired token")]
    TokenUnverifiable,

    /// The credential verified but its subject matches no user record.
    #[error("Invalid token")]
    TokenUnknownUser,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Email and password are required")]
    MissingCredentials,

    /// Deliberately identical for unknown email and wrong password so the
    /// response does not leak which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("Message not found")]
    MessageNotFound,

    #[error("Recipient not found")]
    RecipientNotFound,

    #[error("Property is not available for selected dates")]
    BookingConflict,

    #[error("You can only review properties you have stayed at")]
    NoCompletedBooking,

    #[error("You have already reviewed this property")]
    ReviewAlreadyExists,

    #[error("No valid fields to update")]
    NoUpdateFields,

    /// Caller is authenticated but does not own the entity being mutated.
    #[error("Unauthorized to update this {0}")]
    UnauthorizedUpdate(&'static str),

    #[error("Unauthorized to send message as another user")]
    UnauthorizedSender,
}

impl DomainError {
    /// The machine-readable `error_code` carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::TokenMissing => "AUTH_TOKEN_REQUIRED",
            DomainError::TokenUnverifiable | DomainError::TokenUnknownUser => "AUTH_TOKEN_INVALID",
            DomainError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            DomainError::MissingCredentials => "MISSING_REQUIRED_FIELDS",
            DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::PropertyNotFound => "PROPERTY_NOT_FOUND",
            DomainError::BookingNotFound => "BOOKING_NOT_FOUND",
            DomainError::MessageNotFound => "MESSAGE_NOT_FOUND",
            DomainError::RecipientNotFound => "RECIPIENT_NOT_FOUND",
            DomainError::BookingConflict => "BOOKING_CONFLICT",
            DomainError::NoCompletedBooking => "NO_COMPLETED_BOOKING",
            DomainError::ReviewAlreadyExists => "REVIEW_ALREADY_EXISTS",
            DomainError::NoUpdateFields => "NO_UPDATE_FIELDS",
            DomainError::UnauthorizedUpdate(_) => "UNAUTHORIZED_UPDATE",
            DomainError::UnauthorizedSender => "UNAUTHORIZED_SENDER",
        }
    }
}
