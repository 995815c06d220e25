//! Point-of-sale HTTP router.
//!
//! Composes the handlers under `/api` and wraps them in the CORS, tracing
//! and correlation-id layers.

use crate::config::Config;
use crate::handlers;
use crate::store::PosStore;
use axum::{
    http::{HeaderValue, Method, header},
    routing::get,
    Router,
};
use resource_web::{correlation_id_layer, health_check, method_not_allowed, route_not_found};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the point-of-sale router with all endpoints.
///
/// # Routes
///
/// - `GET /api/health` - Liveness
/// - `GET|POST /api/products` - List / create products
/// - `GET|PUT|DELETE /api/products/:id` - Read / replace / remove a product
/// - `GET|POST /api/orders` - List / record orders
/// - `GET /api/orders/:id` - Read an order
/// - `GET|POST /api/customers` - List / register customers
/// - `GET|PUT|DELETE /api/customers/:id` - Read / replace / remove a customer
///
/// Any other method on these paths answers `405`, unknown paths `404`.
///
/// # Example
///
/// ```rust,ignore
/// let store = Arc::new(PosStore::seeded(Arc::new(SystemClock)));
/// let app = pos_router(store, &Config::from_env());
/// axum::serve(listener, app).await?;
/// ```
pub fn pos_router(store: Arc<PosStore>, config: &Config) -> Router {
    let api = Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(handlers::list_orders)
                .post(handlers::create_order)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/:id",
            get(handlers::get_order).fallback(method_not_allowed),
        )
        .route(
            "/customers",
            get(handlers::list_customers)
                .post(handlers::create_customer)
                .fallback(method_not_allowed),
        )
        .route(
            "/customers/:id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer)
                .fallback(method_not_allowed),
        )
        .with_state(store);

    Router::new()
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .layer(cors_layer(config))
}

/// CORS policy for the storefront client.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .cors_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
