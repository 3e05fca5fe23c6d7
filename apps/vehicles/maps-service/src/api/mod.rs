use axum::{Router, response::IntoResponse, routing::get};
use axum_helpers::server::run_health_checks;
use domain_maps::{CatalogueAddressRepository, MapsService, handlers};

/// `GET /maps` over the built-in address catalogue.
pub fn routes() -> Router {
    handlers::router(MapsService::new(CatalogueAddressRepository::new()))
}

/// The catalogue is in memory, so readiness has no dependency to check.
pub fn ready_router() -> Router {
    Router::new().route(
        "/ready",
        get(|| async {
            match run_health_checks(Vec::new()).await {
                Ok(ready) => ready.into_response(),
                Err(not_ready) => not_ready.into_response(),
            }
        }),
    )
}
