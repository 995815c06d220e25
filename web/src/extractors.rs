//! Extractors that turn Axum rejections into [`AppError`] JSON bodies.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers keep the extraction logic and only change the rejection, so a
//! malformed body or a non-numeric id becomes a `400` with
//! `{"error", "code": "BAD_REQUEST", "details"}`.
//!
//! ```ignore
//! async fn create_product(
//!     State(store): State<Arc<PosStore>>,
//!     JsonBody(input): JsonBody<ProductInput>,
//! ) -> WebResult<(StatusCode, Json<Product>)> { ... }
//!
//! async fn get_todo(PathParam(id): PathParam<i32>) -> WebResult<Json<Todo>> { ... }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON request body; rejects with `400 invalid request body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection)),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    AppError::bad_request("invalid request body").with_details(rejection.body_text())
}

/// Path parameters; rejects with `400 invalid id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| {
                AppError::bad_request("invalid id").with_details(rejection.body_text())
            })
    }
}
