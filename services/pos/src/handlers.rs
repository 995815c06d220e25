//! HTTP handlers for the point-of-sale API.
//!
//! Each handler extracts its input, makes one call into [`PosStore`] and
//! maps the result. Store misses become `404` through `AppError`'s
//! `From<ResourceError>`; malformed bodies are rejected by [`JsonBody`].

use crate::store::PosStore;
use crate::types::{
    Customer, CustomerInput, DeleteResponse, Order, OrderInput, Product, ProductInput,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use resource_web::{JsonBody, WebResult};
use std::sync::Arc;

// ========== Products ==========

/// List the catalog.
///
/// ```text
/// GET /api/products
/// ```
pub async fn list_products(State(store): State<Arc<PosStore>>) -> Json<Vec<Product>> {
    Json(store.products().await)
}

/// Fetch one product.
///
/// ```text
/// GET /api/products/:id
/// ```
///
/// # Errors
///
/// `404` if the product does not exist.
pub async fn get_product(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
) -> WebResult<Json<Product>> {
    Ok(Json(store.product(&id).await?))
}

/// Add a product.
///
/// ```text
/// POST /api/products
/// Content-Type: application/json
///
/// { "name": "Widget", "price": 9.99, "category": "Tools", "stock": 10 }
/// ```
///
/// Responds `201 Created` with the stored product, including its new `id`.
///
/// Malformed bodies are rejected with `400` before this runs.
pub async fn create_product(
    State(store): State<Arc<PosStore>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> (StatusCode, Json<Product>) {
    let product = store.create_product(input).await;
    (StatusCode::CREATED, Json(product))
}

/// Replace a product.
///
/// ```text
/// PUT /api/products/:id
/// ```
///
/// # Errors
///
/// `400` for a malformed body, `404` if the product does not exist.
pub async fn update_product(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> WebResult<Json<Product>> {
    Ok(Json(store.update_product(&id, input).await?))
}

/// Remove a product.
///
/// ```text
/// DELETE /api/products/:id
/// ```
///
/// # Errors
///
/// `404` if the product does not exist.
pub async fn delete_product(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
) -> WebResult<Json<DeleteResponse>> {
    store.delete_product(&id).await?;
    Ok(Json(DeleteResponse::deleted("Product")))
}

// ========== Orders ==========

/// List recorded orders.
///
/// ```text
/// GET /api/orders
/// ```
pub async fn list_orders(State(store): State<Arc<PosStore>>) -> Json<Vec<Order>> {
    Json(store.orders().await)
}

/// Fetch one order.
///
/// ```text
/// GET /api/orders/:id
/// ```
///
/// # Errors
///
/// `404` if the order does not exist.
pub async fn get_order(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
) -> WebResult<Json<Order>> {
    Ok(Json(store.order(&id).await?))
}

/// Record an order and deduct stock.
///
/// ```text
/// POST /api/orders
/// Content-Type: application/json
///
/// {
///   "customer_id": "1",
///   "items": [{ "product_id": "6", "quantity": 3, "price": 9.99 }],
///   "total": 32.37,
///   "tax": 2.4,
///   "payment_method": "card"
/// }
/// ```
///
/// Responds `201 Created` with the order as stored (`id`, `status`,
/// `created_at` filled in).
///
/// Malformed bodies are rejected with `400` before this runs.
pub async fn create_order(
    State(store): State<Arc<PosStore>>,
    JsonBody(input): JsonBody<OrderInput>,
) -> (StatusCode, Json<Order>) {
    let order = store.create_order(input).await;
    (StatusCode::CREATED, Json(order))
}

// ========== Customers ==========

/// List customers.
pub async fn list_customers(State(store): State<Arc<PosStore>>) -> Json<Vec<Customer>> {
    Json(store.customers().await)
}

/// Fetch one customer.
///
/// # Errors
///
/// `404` if the customer does not exist.
pub async fn get_customer(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
) -> WebResult<Json<Customer>> {
    Ok(Json(store.customer(&id).await?))
}

/// Register a customer. Responds `201 Created`.
pub async fn create_customer(
    State(store): State<Arc<PosStore>>,
    JsonBody(input): JsonBody<CustomerInput>,
) -> (StatusCode, Json<Customer>) {
    let customer = store.create_customer(input).await;
    (StatusCode::CREATED, Json(customer))
}

/// Replace a customer's contact fields.
///
/// # Errors
///
/// `400` for a malformed body, `404` if the customer does not exist.
pub async fn update_customer(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CustomerInput>,
) -> WebResult<Json<Customer>> {
    Ok(Json(store.update_customer(&id, input).await?))
}

/// Remove a customer.
///
/// # Errors
///
/// `404` if the customer does not exist.
pub async fn delete_customer(
    State(store): State<Arc<PosStore>>,
    Path(id): Path<String>,
) -> WebResult<Json<DeleteResponse>> {
    store.delete_customer(&id).await?;
    Ok(Json(DeleteResponse::deleted("Customer")))
}
