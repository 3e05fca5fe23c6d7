//! Query-string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Like [`ValidatedJson`](super::ValidatedJson) but for `?key=value` parameters.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Coordinates {
        #[validate(range(min = -90.0, max = 90.0))]
        lat: f64,
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route(
            "/",
            get(|ValidatedQuery(c): ValidatedQuery<Coordinates>| async move { c.lat.to_string() }),
        );
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_query_in_range() {
        assert_eq!(status_for("/?lat=45.5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_out_of_range() {
        assert_eq!(status_for("/?lat=91").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_missing_or_unparsable() {
        assert_eq!(status_for("/").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("/?lat=north").await, StatusCode::BAD_REQUEST);
    }
}
