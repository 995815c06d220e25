//! End-to-end tests of the point-of-sale router.
//!
//! Each test builds a fresh store and drives the router with `oneshot`.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use pos::{Config, PosStore, pos_router};
use resource_testing::test_clock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_app() -> Router {
    pos_router(
        Arc::new(PosStore::seeded(Arc::new(test_clock()))),
        &Config::default(),
    )
}

fn empty_app() -> Router {
    pos_router(
        Arc::new(PosStore::new(Arc::new(test_clock()))),
        &Config::default(),
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn widget_order_deducts_stock() {
    let app = seeded_app();

    let (status, product) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Widget", "price": 9.99, "category": "Tools", "stock": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        product,
        json!({ "id": "6", "name": "Widget", "price": 9.99, "category": "Tools", "stock": 10 })
    );

    let (status, order) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "items": [{ "product_id": "6", "quantity": 3 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["id"], "ORD-1000");
    assert_eq!(order["status"], "Completed");
    assert_eq!(order["created_at"], "2025-01-01T00:00:00Z");

    let (_, product) = send(&app, Method::GET, "/api/products/6", None).await;
    assert_eq!(product["stock"], 7);

    let (status, fetched) = send(&app, Method::GET, "/api/orders/ORD-1000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, order);
}

#[tokio::test]
async fn empty_collections_are_json_arrays() {
    let app = empty_app();
    for uri in ["/api/products", "/api/orders", "/api/customers"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn product_replace_and_delete() {
    let app = seeded_app();

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/products/3",
        Some(json!({ "name": "Green Tea", "price": 7.5, "category": "Beverages", "stock": 80 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "3");
    assert_eq!(updated["name"], "Green Tea");

    let (status, body) = send(&app, Method::DELETE, "/api/products/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Product deleted successfully" }));

    let (status, body) = send(&app, Method::GET, "/api/products/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product with id 3 not found");

    let (_, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn deleting_missing_customer_is_404_and_changes_nothing() {
    let app = empty_app();
    send(&app, Method::POST, "/api/customers", Some(json!({ "name": "Ada" }))).await;

    let (status, body) = send(&app, Method::DELETE, "/api/customers/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (_, list) = send(&app, Method::GET, "/api/customers", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn customer_lifecycle() {
    let app = empty_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "Ada", "phone": "555-0100", "email": "ada@example.com", "address": "1 Loop Rd" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "1");
    assert_eq!(created["created_at"], "2025-01-01T00:00:00Z");

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/customers/1",
        Some(json!({ "name": "Ada Lovelace", "phone": "555-0101", "email": "ada@example.com", "address": "2 Loop Rd" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ada Lovelace");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, body) = send(&app, Method::DELETE, "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Customer deleted successfully" }));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_with_unknown_product_is_still_recorded() {
    let app = seeded_app();
    let (_, before) = send(&app, Method::GET, "/api/products", None).await;

    let (status, order) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "customer_id": "1", "items": [{ "product_id": "999", "quantity": 2, "price": 1.0 }], "payment_method": "cash" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["items"][0]["product_id"], "999");

    let (_, after) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::DELETE, "/api/orders/ORD-1000", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");

    let (status, _) = send(&app, Method::PATCH, "/api/products", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/invoices", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no route for /api/invoices");
}

#[tokio::test]
async fn cors_preflight_allows_storefront() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/products")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let app = seeded_app();
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key(resource_web::CORRELATION_ID_HEADER));
}
