//! End-to-end HTTP tests over the real service with in-memory store and cache.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_config::ServerConfig;
use catalog_rest::{build_router, AppState};
use catalog_repository::InMemoryProductRepository;
use catalog_service::{InMemoryCacheService, ProductServiceImpl};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let service = ProductServiceImpl::new(
        Arc::new(InMemoryProductRepository::new()),
        Arc::new(InMemoryCacheService::new()),
    );
    build_router(AppState::new(Arc::new(service)), &ServerConfig::default())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = app();

    let (status, created) = call(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "name": "Test Product", "price": 10.00 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "productId": 1, "name": "Test Product", "price": 10.0 }));

    let (status, fetched) = call(&app, "GET", "/api/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = call(
        &app,
        "PUT",
        "/api/product/1",
        Some(json!({ "name": "Updated", "price": 12.00 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "productId": 1, "name": "Updated", "price": 12.0 }));

    let (status, listed) = call(&app, "GET", "/api/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));

    let (status, body) = call(&app, "DELETE", "/api/product/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = call(&app, "GET", "/api/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_reflects_creates_after_being_cached() {
    let app = app();

    let (_, listed) = call(&app, "GET", "/api/product", None).await;
    assert_eq!(listed, json!([]));

    call(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "name": "Pen", "price": 1.50 })),
    )
    .await;
    call(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "name": "Ink", "price": 4.99 })),
    )
    .await;

    let (_, listed) = call(&app, "GET", "/api/product", None).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Pen", "Ink"]);
}

#[tokio::test]
async fn test_delete_unknown_product_returns_204() {
    let app = app();

    let (status, _) = call(&app, "DELETE", "/api/product/12345", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_unknown_product_returns_404() {
    let app = app();

    let (status, _) = call(
        &app,
        "PUT",
        "/api/product/5",
        Some(json!({ "name": "Ghost", "price": 1.00 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_create_leaves_catalog_empty() {
    let app = app();

    let (status, _) = call(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "name": "", "price": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = call(&app, "GET", "/api/product", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_price_digits_are_preserved_end_to_end() {
    let app = app();
    let body: Value =
        serde_json::from_str(r#"{ "name": "Yacht", "price": 12345678901234567.89 }"#).unwrap();

    let (status, created) = call(&app, "POST", "/api/product", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price"].to_string(), "12345678901234567.89");

    let (_, fetched) = call(&app, "GET", "/api/product/1", None).await;
    assert_eq!(fetched, created);

    let (_, listed) = call(&app, "GET", "/api/product", None).await;
    assert_eq!(listed[0]["price"].to_string(), "12345678901234567.89");
}

#[tokio::test]
async fn test_values_outside_column_limits_return_400() {
    let app = app();
    let too_precise: Value = serde_json::from_str(r#"{ "name": "Pen", "price": 10.005 }"#).unwrap();

    let (status, body) = call(&app, "POST", "/api/product", Some(too_precise)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "price");

    let (status, body) = call(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "name": "x".repeat(256), "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "name");

    let (_, listed) = call(&app, "GET", "/api/product", None).await;
    assert_eq!(listed, json!([]));
}
