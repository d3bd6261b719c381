//! User lookup.

use axum::extract::{Path, State};

use stayhub_core::error::DomainError;
use stayhub_core::types::EntityId;
use stayhub_db::models::user::PublicUser;
use stayhub_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/users/{id}`
///
/// Returns the credential-free projection. Any authenticated caller may
/// look up any user.
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<EntityId>,
) -> AppResult<Json<PublicUser>> {
    let user = UserRepo::find_public_by_id(&state.pool, user_id)
        .await?
        .ok_or(DomainError::UserNotFound)?;

    Ok(Json(user))
}
