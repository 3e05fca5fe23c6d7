//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicles API",
        version = "0.1.0",
        description = "Car inventory with prices and addresses resolved from the pricing and maps services"
    ),
    servers((url = "http://localhost:8080", description = "Local development server")),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse))
)]
struct ServiceDoc;

/// Service metadata merged with the `/cars` operations.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_vehicles::handlers::ApiDoc::openapi())
    }
}
