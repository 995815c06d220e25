//! Handlers shared by every service router.

pub mod health;

use crate::error::AppError;
use axum::http::{StatusCode, Uri};

pub use health::{HealthStatus, health_check};

/// Fallback for a route that exists but not with the request's method.
///
/// Mounted with `MethodRouter::fallback` so the body is JSON like every
/// other error.
#[allow(clippy::unused_async)]
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// Router-level fallback for paths no route matches.
#[allow(clippy::unused_async)]
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::new(
        StatusCode::NOT_FOUND,
        format!("no route for {}", uri.path()),
        "NOT_FOUND".to_string(),
    )
}
