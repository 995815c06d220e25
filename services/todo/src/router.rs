//! Todo HTTP router.

use crate::handlers;
use crate::service::TodoService;
use axum::{
    middleware::map_response,
    routing::{get, post},
    Router,
};
use resource_web::{
    correlation_id_layer, health_check, method_not_allowed, route_not_found, timeout_as_json,
};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Upper bound on a single request, database round-trip included.
///
/// Expiry answers `408` with the usual JSON error body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the todo router with all endpoints.
///
/// # Routes
///
/// - `GET|POST /todos` - List / create
/// - `GET|PUT|DELETE /todos/:id` - Read / patch / remove
/// - `POST /todos/:id/toggle` - Flip completion
/// - `GET /health` - Liveness
/// - `GET /health/ready` - Database reachability
pub fn todo_router(service: TodoService) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/:id/toggle",
            post(handlers::toggle_todo).fallback(method_not_allowed),
        )
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/health/ready",
            get(handlers::readiness).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(service)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(map_response(timeout_as_json))
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
}
