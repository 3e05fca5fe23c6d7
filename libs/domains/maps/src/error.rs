use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsError {
    #[error("No address known near ({lat}, {lon})")]
    NotFound { lat: f64, lon: f64 },
}

pub type MapsResult<T> = Result<T, MapsError>;

impl From<MapsError> for AppError {
    fn from(err: MapsError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl IntoResponse for MapsError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
