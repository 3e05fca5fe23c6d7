use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// ISO 4217 style code: exactly three upper-case ASCII letters.
fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_currency_code"))
    }
}

/// Price of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Price {
    pub id: i64,
    /// Three-letter currency code, e.g. "USD"
    pub currency: String,
    pub price: f64,
    /// Vehicle this price belongs to; unique across prices
    pub vehicle_id: i64,
}

/// Body of `POST /prices` and `PUT /prices/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct PriceInput {
    #[validate(custom(function = "validate_currency_code"))]
    #[schema(example = "USD")]
    pub currency: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub vehicle_id: i64,
}

/// `?vehicleId=` parameter of the lookup endpoint.
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VehiclePriceQuery {
    #[serde(rename = "vehicleId")]
    #[validate(range(min = 1))]
    pub vehicle_id: i64,
}
