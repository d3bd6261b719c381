//! Registration and login.
//!
//! Both paths issue an HS256 token, persist an `auth_tokens` audit row and
//! return the same response shape. Registration additionally announces the
//! issued token on the realtime bus (see DESIGN.md on why that broadcast is
//! kept despite its breadth).

use axum::extract::State;
use serde::Serialize;
use serde_json::json;
use validator::Validate;

use stayhub_core::error::DomainError;
use stayhub_core::types::{EntityId, Timestamp};
use stayhub_db::models::user::{LoginInput, PublicUser, RegisterInput, User};
use stayhub_db::repositories::{AuthTokenRepo, UserRepo};
use stayhub_events::RealtimeEvent;

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Response body for both `POST /api/auth/register` and `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
    pub token_id: EntityId,
    pub is_valid: bool,
    pub created_at: Timestamp,
}

/// `POST /api/auth/register`
///
/// Creates the account, issues a token and returns both. The email is
/// normalized (trimmed, lowercased) before the uniqueness check so casing
/// variants of the same address collide.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<Json<AuthResponse>> {
    input.validate()?;

    let email = input.email.trim().to_lowercase();
    let name = input.name.trim().to_string();

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(DomainError::UserAlreadyExists.into());
    }

    let user = UserRepo::create(&state.pool, &email, &input.password, &name, chrono::Utc::now())
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let response = issue_token(&state, &user).await?;

    state.event_bus.publish(RealtimeEvent::broadcast(
        "auth/token/generate",
        json!({
            "id": response.token_id,
            "user_id": user.id,
            "token": response.token,
            "is_valid": response.is_valid,
            "created_at": response.created_at,
        }),
    ));

    Ok(Json(response))
}

/// `POST /api/auth/login`
///
/// Plain-equality credential comparison against the stored password,
/// preserved from the source system (see DESIGN.md). Unknown email and
/// wrong password produce the identical error so the response does not
/// reveal which one failed.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<AuthResponse>> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(DomainError::MissingCredentials.into());
    }

    let email = input.email.trim().to_lowercase();

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or(DomainError::InvalidCredentials)?;

    if input.password != user.password {
        return Err(DomainError::InvalidCredentials.into());
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let response = issue_token(&state, &user).await?;
    Ok(Json(response))
}

/// Sign a token for `user` and persist the audit row.
async fn issue_token(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let token = generate_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let record = AuthTokenRepo::create(&state.pool, user.id, &token, chrono::Utc::now()).await?;

    Ok(AuthResponse {
        user: PublicUser::from(user.clone()),
        token: record.token,
        token_id: record.id,
        is_valid: record.is_valid,
        created_at: record.created_at,
    })
}
