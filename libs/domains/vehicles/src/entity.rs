use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Car, CarInput, Condition, Location};

/// Sea-ORM Entity for the cars table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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
    #[sea_orm(column_type = "Double", nullable)]
    pub lat: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub lon: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Car {
    fn from(model: Model) -> Self {
        let location = match (model.lat, model.lon) {
            (Some(lat), Some(lon)) => Some(Location::new(lat, lon)),
            _ => None,
        };

        Self {
            id: model.id,
            created_at: model.created_at.into(),
            modified_at: model.modified_at.into(),
            condition: model.condition,
            make: model.make,
            model: model.model,
            body: model.body,
            engine: model.engine,
            fuel_type: model.fuel_type,
            external_color: model.external_color,
            model_year: model.model_year,
            production_year: model.production_year,
            mileage: model.mileage,
            number_of_doors: model.number_of_doors,
            location,
            price: None,
        }
    }
}

impl ActiveModel {
    /// Every column from the input. Timestamps are left to column defaults
    /// and the `modified_at` trigger.
    pub fn from_input(id: Option<i64>, input: CarInput) -> Self {
        let (lat, lon) = input
            .location
            .map_or((None, None), |l| (Some(l.lat), Some(l.lon)));

        Self {
            id: id.map_or(NotSet, Set),
            condition: Set(input.condition),
            make: Set(input.make),
            model: Set(input.model),
            body: Set(input.body),
            engine: Set(input.engine),
            fuel_type: Set(input.fuel_type),
            external_color: Set(input.external_color),
            model_year: Set(input.model_year),
            production_year: Set(input.production_year),
            mileage: Set(input.mileage),
            number_of_doors: Set(input.number_of_doors),
            lat: Set(lat),
            lon: Set(lon),
            created_at: NotSet,
            modified_at: NotSet,
        }
    }
}
