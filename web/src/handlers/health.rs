//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use axum::Json;
use serde::Serialize;

/// Liveness body.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}

/// Simple health check endpoint (for basic liveness).
///
/// This endpoint does NOT check dependencies (database, etc.).
///
/// # Response
///
/// ```json
/// { "status": "ok" }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
