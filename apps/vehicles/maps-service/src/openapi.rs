use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Maps Service",
        version = "0.1.0",
        description = "Mock street addresses for coordinates"
    ),
    servers((url = "http://localhost:9191", description = "Local development server")),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse))
)]
struct ServiceDoc;

pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_maps::handlers::ApiDoc::openapi())
    }
}
