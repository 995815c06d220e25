//! Axum plumbing shared by the point-of-sale and todo services.
//!
//! Both services are thin HTTP shells over their state: handlers extract
//! input, call into a store or service, and map the result to a response.
//! This crate holds the parts they have in common.
//!
//! - [`AppError`]: the JSON error body and the `ResourceError` status mapping
//! - [`JsonBody`] / [`PathParam`]: extractors whose rejections are `AppError`s
//! - [`correlation_id_layer`]: per-request ids on spans and response headers
//! - [`timeout_as_json`]: JSON body for timeout `408`s
//! - [`handlers`]: liveness and the JSON `404`/`405` fallbacks
//!
//! # Request Flow
//!
//! 1. **HTTP Request** passes the trace and correlation-id layers
//! 2. **Extract** path and body, rejecting bad input with `400`
//! 3. **Call** the store or service
//! 4. **Map** `ResourceError` to a status via `?`
//!
//! # Example
//!
//! ```ignore
//! use resource_web::{JsonBody, WebResult};
//!
//! async fn create_customer(
//!     State(store): State<Arc<PosStore>>,
//!     JsonBody(input): JsonBody<CustomerInput>,
//! ) -> WebResult<(StatusCode, Json<Customer>)> {
//!     let customer = store.create_customer(input).await;
//!     Ok((StatusCode::CREATED, Json(customer)))
//! }
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{JsonBody, PathParam};
pub use handlers::{health_check, method_not_allowed, route_not_found};
pub use middleware::{CORRELATION_ID_HEADER, CorrelationId, correlation_id_layer, timeout_as_json};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
