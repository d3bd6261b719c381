//! Shared response body types.
//!
//! Success responses carry the entity record directly; only failures use an
//! envelope. [`ErrorBody`] is the single error shape every endpoint and the
//! socket layer produce: success flag, human-readable message, optional
//! machine-readable code, optional diagnostic detail, timestamp.

use serde::Serialize;
use stayhub_core::types::Timestamp;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: Timestamp,
}

impl ErrorBody {
    /// Build an error body with the current timestamp.
    pub fn new(
        message: impl Into<String>,
        error_code: Option<&'static str>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code,
            details,
            timestamp: chrono::Utc::now(),
        }
    }
}
