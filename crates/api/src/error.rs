use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stayhub_core::error::DomainError;

use crate::response::ErrorBody;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DomainError`] for domain failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the structured JSON error shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stayhub_core`.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input failed schema validation; carries every field violation.
    #[error("Invalid input data")]
    Validation(#[from] validator::ValidationErrors),

    /// The request body could not be parsed as JSON of the expected shape.
    #[error("Invalid request body")]
    BodyRejection(#[from] axum::extract::rejection::JsonRejection),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// HTTP status for each domain error variant.
fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::TokenMissing | DomainError::TokenUnknownUser => StatusCode::UNAUTHORIZED,
        DomainError::TokenUnverifiable
        | DomainError::UnauthorizedUpdate(_)
        | DomainError::UnauthorizedSender => StatusCode::FORBIDDEN,
        DomainError::UserNotFound
        | DomainError::PropertyNotFound
        | DomainError::BookingNotFound
        | DomainError::MessageNotFound
        | DomainError::RecipientNotFound => StatusCode::NOT_FOUND,
        DomainError::UserAlreadyExists
        | DomainError::MissingCredentials
        | DomainError::InvalidCredentials
        | DomainError::BookingConflict
        | DomainError::NoCompletedBooking
        | DomainError::ReviewAlreadyExists
        | DomainError::NoUpdateFields => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Domain(domain) => (
                domain_status(domain),
                ErrorBody::new(domain.to_string(), Some(domain.code()), None),
            ),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    "Invalid input data",
                    Some("VALIDATION_ERROR"),
                    serde_json::to_value(errors).ok(),
                ),
            ),

            AppError::BodyRejection(rejection) => (
                rejection.status(),
                ErrorBody::new(rejection.body_text(), Some("VALIDATION_ERROR"), None),
            ),

            // Database failures surface as opaque 500s; the raw error goes
            // to the log, never to the client.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error", Some("INTERNAL_SERVER_ERROR"), None),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error", Some("INTERNAL_SERVER_ERROR"), None),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
