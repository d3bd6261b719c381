//! Auth token entity model.
//!
//! A row is written on every successful login and registration. No code path
//! reads these rows back for revocation or validity checks; session validity
//! is carried entirely by the signed token itself. Replicated from the source
//! system as-is (see DESIGN.md).

use serde::Serialize;
use sqlx::FromRow;
use stayhub_core::types::{EntityId, Timestamp};

/// A row from the `auth_tokens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuthToken {
    pub id: EntityId,
    pub user_id: EntityId,
    pub token: String,
    pub is_valid: bool,
    pub created_at: Timestamp,
}
