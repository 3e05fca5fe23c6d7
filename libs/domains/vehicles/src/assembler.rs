use axum_helpers::ResourceAssembler;

use crate::models::Car;

/// Links cars to `/cars/{id}` and back to `/cars`.
pub struct CarAssembler;

impl ResourceAssembler for CarAssembler {
    type Entity = Car;

    const REL: &'static str = "cars";
    const COLLECTION: &'static str = "/cars";
    const ITEM: &'static str = "/cars/{id}";

    fn id_of(car: &Car) -> i64 {
        car.id
    }
}
