use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, Resource, ResourceAssembler, Resources, ValidatedJson, ValidatedQuery,
    hateoas::expand,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::assembler::PriceAssembler;
use crate::error::{PriceError, PriceResult};
use crate::models::{Price, PriceInput, VehiclePriceQuery};
use crate::repository::PriceRepository;
use crate::service::PriceService;

pub const TAG: &str = "prices";

/// OpenAPI documentation for the pricing API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_prices,
        create_price,
        get_price,
        update_price,
        delete_price,
        price_for_vehicle,
    ),
    components(
        schemas(Price, PriceInput),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Vehicle prices"))
)]
pub struct ApiDoc;

pub fn router<R: PriceRepository + 'static>(service: PriceService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/prices", get(list_prices::<R>).post(create_price::<R>))
        .route(
            "/prices/{id}",
            get(get_price::<R>)
                .put(update_price::<R>)
                .delete(delete_price::<R>),
        )
        .route("/services/price", get(price_for_vehicle::<R>))
        .with_state(shared_service)
}

/// List all prices
#[utoipa::path(
    get,
    path = "/prices",
    tag = TAG,
    responses(
        (status = 200, description = "All prices", body = Resources<Price>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_prices<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
) -> PriceResult<Json<Resources<Price>>> {
    let prices = service.list().await?;
    Ok(Json(PriceAssembler::to_collection(prices)))
}

/// Get a price by id
#[utoipa::path(
    get,
    path = "/prices/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Price id")),
    responses(
        (status = 200, description = "Price found", body = Resource<Price>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_price<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
    IdPath(id): IdPath,
) -> PriceResult<Json<Resource<Price>>> {
    let price = service.find_by_id(id).await?;
    Ok(Json(PriceAssembler::to_model(price)))
}

/// Create a price
#[utoipa::path(
    post,
    path = "/prices",
    tag = TAG,
    request_body = PriceInput,
    responses(
        (status = 201, description = "Price created", body = Resource<Price>,
            headers(("Location" = String, description = "URI of the new price"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_price<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
    ValidatedJson(input): ValidatedJson<PriceInput>,
) -> PriceResult<impl IntoResponse> {
    let price = service.save(None, input).await?;
    let location = expand(PriceAssembler::ITEM, price.id);
    let resource = PriceAssembler::to_model(price);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(resource),
    ))
}

/// Replace a price
#[utoipa::path(
    put,
    path = "/prices/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Price id")),
    request_body = PriceInput,
    responses(
        (status = 200, description = "Price replaced", body = Resource<Price>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_price<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<PriceInput>,
) -> PriceResult<Json<Resource<Price>>> {
    let price = service.save(Some(id), input).await?;
    Ok(Json(PriceAssembler::to_model(price)))
}

/// Delete a price
#[utoipa::path(
    delete,
    path = "/prices/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Price id")),
    responses(
        (status = 204, description = "Price deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Price not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_price<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
    IdPath(id): IdPath,
) -> PriceResult<StatusCode> {
    match service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(PriceError::NotFound(_)) => Ok(StatusCode::NOT_FOUND),
        Err(e) => Err(e),
    }
}

/// Price of a vehicle
#[utoipa::path(
    get,
    path = "/services/price",
    tag = TAG,
    params(VehiclePriceQuery),
    responses(
        (status = 200, description = "Price of the vehicle", body = Price),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn price_for_vehicle<R: PriceRepository>(
    State(service): State<Arc<PriceService<R>>>,
    ValidatedQuery(query): ValidatedQuery<VehiclePriceQuery>,
) -> PriceResult<Json<Price>> {
    let price = service.find_by_vehicle_id(query.vehicle_id).await?;
    Ok(Json(price))
}
