use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Price not found: {0}")]
    NotFound(i64),

    #[error("No price for vehicle {0}")]
    VehicleNotFound(i64),

    #[error("Vehicle {0} already has a price")]
    DuplicateVehicle(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type PriceResult<T> = Result<T, PriceError>;

impl From<PriceError> for AppError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::NotFound(id) => AppError::NotFound(format!("Price {} not found", id)),
            PriceError::VehicleNotFound(vehicle_id) => {
                AppError::NotFound(format!("Price for vehicle {} not found", vehicle_id))
            }
            PriceError::DuplicateVehicle(vehicle_id) => AppError::Conflict(format!(
                "Vehicle {} already has a price",
                vehicle_id
            )),
            PriceError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for PriceError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
