use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pricing Service",
        version = "0.1.0",
        description = "Vehicle prices and the per-vehicle price lookup"
    ),
    servers((url = "http://localhost:8082", description = "Local development server")),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse))
)]
struct ServiceDoc;

pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_pricing::handlers::ApiDoc::openapi())
    }
}
