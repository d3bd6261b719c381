//! Repository for the `users` table.

use sqlx::PgPool;
use stayhub_core::types::{EntityId, Timestamp};
use uuid::Uuid;

use crate::models::user::{PublicUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password, name, created_at";

/// Columns safe to return to clients (no credential).
const PUBLIC_COLUMNS: &str = "id, email, name, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a fresh id, returning the created row.
    ///
    /// The caller is responsible for normalizing `email` and `name` first.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password: &str,
        name: &str,
        created_at: Timestamp,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, password, name, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(password)
            .bind(name)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal id, including the stored credential.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the credential-free projection of a user by id.
    pub async fn find_public_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email. The caller normalizes case/whitespace.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a user row exists for the given id.
    pub async fn exists(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }
}
