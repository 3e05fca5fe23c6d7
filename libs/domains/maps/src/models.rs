use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Street address returned for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    /// Street line, e.g. "777 Brockton Avenue"
    pub address: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn new(address: &str, city: &str, state: &str, zip: &str) -> Self {
        Self {
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        }
    }
}

/// `range` alone lets NaN through.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

/// `?lat=&lon=` query parameters of the lookup endpoint.
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct Coordinates {
    /// Latitude in degrees
    #[validate(range(min = -90.0, max = 90.0), custom(function = "validate_finite"))]
    pub lat: f64,
    /// Longitude in degrees
    #[validate(range(min = -180.0, max = 180.0), custom(function = "validate_finite"))]
    pub lon: f64,
}
