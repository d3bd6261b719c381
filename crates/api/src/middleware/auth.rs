//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stayhub_core::error::DomainError;
use stayhub_db::models::user::PublicUser;
use stayhub_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization`
/// header and resolved to a live user record.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved user record (credential-free projection).
    pub user: PublicUser,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(DomainError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::TokenMissing)?;

        let claims =
            validate_token(token, &state.config.jwt).map_err(|_| DomainError::TokenUnverifiable)?;

        // The subject must still resolve to a live record; a token for a
        // vanished user is as invalid as a forged one.
        let user = UserRepo::find_public_by_id(&state.pool, claims.sub)
            .await?
            .ok_or(DomainError::TokenUnknownUser)?;

        Ok(AuthUser { user })
    }
}
