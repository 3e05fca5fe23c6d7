use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{BadRequestValidationResponse, NotFoundResponse},
};
use utoipa::OpenApi;

use crate::error::MapsResult;
use crate::models::{Address, Coordinates};
use crate::repository::AddressRepository;
use crate::service::MapsService;

pub const TAG: &str = "maps";

#[derive(OpenApi)]
#[openapi(
    paths(get_address),
    components(
        schemas(Address, Coordinates),
        responses(BadRequestValidationResponse, NotFoundResponse)
    ),
    tags((name = TAG, description = "Address lookup by coordinate"))
)]
pub struct ApiDoc;

pub fn router<R: AddressRepository + 'static>(service: MapsService<R>) -> Router {
    Router::new()
        .route("/maps", get(get_address::<R>))
        .with_state(Arc::new(service))
}

/// Look up the street address of a coordinate
#[utoipa::path(
    get,
    path = "/maps",
    tag = TAG,
    params(Coordinates),
    responses(
        (status = 200, description = "Address for the coordinate", body = Address),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_address<R: AddressRepository>(
    State(service): State<Arc<MapsService<R>>>,
    ValidatedQuery(coords): ValidatedQuery<Coordinates>,
) -> MapsResult<Json<Address>> {
    let address = service.get_address(coords.lat, coords.lon).await?;
    Ok(Json(address))
}
