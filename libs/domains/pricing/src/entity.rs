use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Price, PriceInput};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub currency: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(unique)]
    pub vehicle_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Price {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            currency: model.currency,
            price: model.price,
            vehicle_id: model.vehicle_id,
        }
    }
}

impl ActiveModel {
    /// Full row from the input; `id: None` leaves the key to the sequence.
    pub fn from_input(id: Option<i64>, input: PriceInput) -> Self {
        Self {
            id: id.map_or(NotSet, Set),
            currency: Set(input.currency),
            price: Set(input.price),
            vehicle_id: Set(input.vehicle_id),
        }
    }
}
