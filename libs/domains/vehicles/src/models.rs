use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// First year a production car could have been built.
pub const MIN_YEAR: i32 = 1886;
pub const MAX_YEAR: i32 = 2100;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "car_condition")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Condition {
    #[sea_orm(string_value = "new")]
    New,
    #[default]
    #[sea_orm(string_value = "used")]
    Used,
}

/// Street address filled in from the maps service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    /// Never stored; resolved on single-car reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
        }
    }
}

/// Car as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Car {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub condition: Condition,
    pub make: String,
    pub model: Option<String>,
    pub body: Option<String>,
    pub engine: Option<String>,
    pub fuel_type: Option<String>,
    pub external_color: Option<String>,
    pub model_year: Option<i32>,
    pub production_year: Option<i32>,
    pub mileage: Option<i32>,
    pub number_of_doors: Option<i32>,
    pub location: Option<Location>,
    /// e.g. "USD 12345.67"; never stored, resolved on single-car reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct LocationInput {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

/// Body of `POST /cars` and `PUT /cars/{id}`.
///
/// Unknown fields (an `id`, a `price`, a location `address`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CarInput {
    #[serde(default)]
    pub condition: Condition,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Chevrolet")]
    pub make: String,
    #[validate(length(max = 100))]
    #[schema(example = "Impala")]
    pub model: Option<String>,
    #[validate(length(max = 255))]
    pub body: Option<String>,
    #[validate(length(max = 255))]
    pub engine: Option<String>,
    #[validate(length(max = 255))]
    pub fuel_type: Option<String>,
    #[validate(length(max = 255))]
    pub external_color: Option<String>,
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub model_year: Option<i32>,
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub production_year: Option<i32>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    #[validate(range(min = 1, max = 8))]
    pub number_of_doors: Option<i32>,
    #[validate(nested)]
    pub location: Option<LocationInput>,
}

impl CarInput {
    /// Minimal valid input.
    pub fn new(make: impl Into<String>) -> Self {
        Self {
            condition: Condition::default(),
            make: make.into(),
            model: None,
            body: None,
            engine: None,
            fuel_type: None,
            external_color: None,
            model_year: None,
            production_year: None,
            mileage: None,
            number_of_doors: None,
            location: None,
        }
    }
}
