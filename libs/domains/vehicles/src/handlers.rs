use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, Resource, ResourceAssembler, Resources, ValidatedJson,
    hateoas::expand,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::assembler::CarAssembler;
use crate::error::{CarError, CarResult};
use crate::models::{Address, Car, CarInput, Condition, Location, LocationInput};
use crate::repository::CarRepository;
use crate::service::CarService;

pub const TAG: &str = "cars";

/// OpenAPI documentation for the vehicles API
#[derive(OpenApi)]
#[openapi(
    paths(list_cars, get_car, create_car, update_car, delete_car),
    components(
        schemas(Car, CarInput, Condition, Location, LocationInput, Address),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Vehicle inventory"))
)]
pub struct ApiDoc;

/// Routes for `/cars` and `/cars/{id}`
pub fn router<R: CarRepository + 'static>(service: CarService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/cars", get(list_cars::<R>).post(create_car::<R>))
        .route(
            "/cars/{id}",
            get(get_car::<R>).put(update_car::<R>).delete(delete_car::<R>),
        )
        .with_state(shared_service)
}

/// List all cars
#[utoipa::path(
    get,
    path = "/cars",
    tag = TAG,
    responses(
        (status = 200, description = "All cars with links", body = Resources<Car>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_cars<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
) -> CarResult<Json<Resources<Car>>> {
    let cars = service.list().await?;
    Ok(Json(CarAssembler::to_collection(cars)))
}

/// Get a car, with its price and address resolved
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car found", body = Resource<Car>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    IdPath(id): IdPath,
) -> CarResult<Json<Resource<Car>>> {
    let car = service.find_by_id(id).await?;
    Ok(Json(CarAssembler::to_model(car)))
}

/// Create a car
#[utoipa::path(
    post,
    path = "/cars",
    tag = TAG,
    request_body = CarInput,
    responses(
        (status = 201, description = "Car created", body = Resource<Car>,
            headers(("Location" = String, description = "URI of the new car"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> CarResult<impl IntoResponse> {
    let car = service.save(None, input).await?;
    let location = expand(CarAssembler::ITEM, car.id);
    let resource = CarAssembler::to_model(car);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(resource),
    ))
}

/// Replace a car
#[utoipa::path(
    put,
    path = "/cars/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarInput,
    responses(
        (status = 200, description = "Car replaced", body = Resource<Car>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> CarResult<Json<Resource<Car>>> {
    let car = service.save(Some(id), input).await?;
    Ok(Json(CarAssembler::to_model(car)))
}

/// Delete a car
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Car not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    IdPath(id): IdPath,
) -> CarResult<StatusCode> {
    match service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(CarError::NotFound(_)) => Ok(StatusCode::NOT_FOUND),
        Err(e) => Err(e),
    }
}
