//! Repository for the `auth_tokens` table.

use sqlx::PgPool;
use stayhub_core::types::{EntityId, Timestamp};
use uuid::Uuid;

use crate::models::auth_token::AuthToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token, is_valid, created_at";

/// Provides operations for persisted auth token records.
///
/// Records are write-only in the current system: issued on login/register
/// and never consulted afterwards.
pub struct AuthTokenRepo;

impl AuthTokenRepo {
    /// Persist a freshly issued token, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: EntityId,
        token: &str,
        created_at: Timestamp,
    ) -> Result<AuthToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_tokens (id, user_id, token, is_valid, created_at)
             VALUES ($1, $2, $3, TRUE, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(token)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }
}
