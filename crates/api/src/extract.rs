//! Request extractors whose rejections share the structured error shape.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// `axum::Json` with its rejection converted into [`AppError`], so a
/// malformed or mistyped request body produces the same
/// `{success, message, error_code, timestamp}` response as every other
/// failure instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
