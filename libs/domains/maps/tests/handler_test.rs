//! HTTP-level tests for `GET /maps`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_maps::*;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    handlers::router(MapsService::new(CatalogueAddressRepository::new()))
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_lookup_returns_address() {
    let response = get("/maps?lat=40.7&lon=-73.9").await;
    assert_eq!(response.status(), StatusCode::OK);

    let address: Address = json_body(response.into_body()).await;
    assert!(!address.address.is_empty());
    assert_eq!(address.state.len(), 2);
}

#[tokio::test]
async fn test_lookup_is_stable_across_calls() {
    let first: Address = json_body(get("/maps?lat=40.7&lon=-73.9").await.into_body()).await;
    let second: Address = json_body(get("/maps?lat=40.7&lon=-73.9").await.into_body()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_latitude_out_of_range_is_400() {
    let response = get("/maps?lat=200&lon=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["lat"].is_array());
}

#[tokio::test]
async fn test_missing_coordinate_is_400() {
    let response = get("/maps?lat=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_empty_catalogue_is_404() {
    let app = handlers::router(MapsService::new(CatalogueAddressRepository::with_entries(vec![])));
    let response = app
        .oneshot(Request::get("/maps?lat=1&lon=2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nan_coordinate_is_400() {
    for uri in ["/maps?lat=NaN&lon=0", "/maps?lat=0&lon=NaN"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: serde_json::Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
