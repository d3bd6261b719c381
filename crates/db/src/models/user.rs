//! User entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{EntityId, Timestamp};
use validator::Validate;

/// A row from the `users` table. Never serialized to clients directly
/// because it carries the stored credential; use [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    /// Stored as provided at registration and compared with plain equality
    /// at login. Development shortcut carried over from the source system.
    pub password: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// Credential-free projection of a user, safe to return to any caller.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicUser {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Request body for `POST /api/auth/login`.
///
/// Not validated through `validator`: login only requires both fields to be
/// present and non-empty, and any shape of mismatch must collapse into the
/// same generic invalid-credentials error. Fields default to empty so an
/// absent field reaches the handler's own presence check instead of being
/// rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
