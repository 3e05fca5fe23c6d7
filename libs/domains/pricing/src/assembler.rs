use axum_helpers::ResourceAssembler;

use crate::models::Price;

pub struct PriceAssembler;

impl ResourceAssembler for PriceAssembler {
    type Entity = Price;

    const REL: &'static str = "prices";
    const COLLECTION: &'static str = "/prices";
    const ITEM: &'static str = "/prices/{id}";

    fn id_of(price: &Price) -> i64 {
        price.id
    }
}
