use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use discovery::DiscoveryError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("Car not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type CarResult<T> = Result<T, CarError>;

impl From<CarError> for AppError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::NotFound(id) => AppError::NotFound(format!("Car {} not found", id)),
            CarError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CarError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Failure of a remote price or address lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Could not locate service: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} answered {status}")]
    UnexpectedStatus { service: &'static str, status: u16 },
}

pub type LookupResult<T> = Result<T, LookupError>;
