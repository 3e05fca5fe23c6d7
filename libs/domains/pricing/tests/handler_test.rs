//! Handler tests for the pricing domain.
//!
//! Most tests run against the in-memory repository; the seeded lookup test
//! needs Docker and is ignored by default.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_pricing::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    handlers::router(PriceService::new(InMemoryPriceRepository::new()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let response = app()
        .oneshot(post_json(
            "/prices",
            json!({"currency": "USD", "price": 12000.5, "vehicle_id": 3}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/prices/1");

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["vehicle_id"], 3);
    assert_eq!(body["_links"]["self"]["href"], "/prices/1");
    assert_eq!(body["_links"]["prices"]["href"], "/prices");
}

#[tokio::test]
async fn test_lookup_by_vehicle() {
    let app = app();
    app.clone()
        .oneshot(post_json(
            "/prices",
            json!({"currency": "USD", "price": 9000.0, "vehicle_id": 12}),
        ))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/services/price?vehicleId=12")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let price: Price = json_body(response.into_body()).await;
    assert_eq!(price.vehicle_id, 12);
    assert_eq!(price.currency, "USD");

    let missing = app.oneshot(get("/services/price?vehicleId=13")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_vehicle_is_409() {
    let app = app();
    let body = json!({"currency": "USD", "price": 1.0, "vehicle_id": 4});

    let first = app.clone().oneshot(post_json("/prices", body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_json("/prices", body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let error: Value = json_body(second.into_body()).await;
    assert_eq!(error["error"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_currency_is_400() {
    let response = app()
        .oneshot(post_json(
            "/prices",
            json!({"currency": "dollars", "price": 1.0, "vehicle_id": 4}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");
    assert!(error["details"]["currency"].is_array());
}

#[tokio::test]
async fn test_put_unknown_is_404() {
    let response = app()
        .oneshot(put_json(
            "/prices/99",
            json!({"currency": "USD", "price": 1.0, "vehicle_id": 4}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let app = app();
    app.clone()
        .oneshot(post_json(
            "/prices",
            json!({"currency": "EUR", "price": 5.0, "vehicle_id": 8}),
        ))
        .await
        .unwrap();

    let delete = || Request::delete("/prices/1").body(Body::empty()).unwrap();

    let first = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app.oneshot(delete()).await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let bytes = second.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let response = app().oneshot(get("/prices/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_empty_collection_keeps_embedded() {
    let response = app().oneshot(get("/prices")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["_embedded"]["prices"], json!([]));
    assert_eq!(body["_links"]["self"]["href"], "/prices");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_seeded_prices_served_from_postgres() {
    let db = TestDatabase::new().await;
    let app = handlers::router(PriceService::new(PgPriceRepository::new(db.connection())));

    let response = app.clone().oneshot(get("/services/price?vehicleId=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let price: Price = json_body(response.into_body()).await;
    assert_eq!(price.currency, "USD");
    assert!(price.price >= 10_000.0);

    let builder = TestDataBuilder::from_test_name("test_seeded_prices_served_from_postgres");
    let vehicle_id = builder.vehicle_id();
    let created = app
        .oneshot(post_json(
            "/prices",
            json!({"currency": "GBP", "price": 7.25, "vehicle_id": vehicle_id}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
}
