use std::sync::Arc;

use axum::{Router, routing::get};
use discovery::ServiceEndpoint;
use domain_vehicles::clients::{MAPS_APP, PRICING_APP};
use domain_vehicles::{CarService, HttpMapsClient, HttpPriceClient, PgCarRepository, handlers};
use tracing::{info, warn};

use crate::state::AppState;

pub mod health;

/// `/cars` routes over PostgreSQL, with price and address enrichment when
/// the pricing and maps services can be located.
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    let mut service = CarService::new(PgCarRepository::new(state.db.clone()));

    match ServiceEndpoint::resolve_from(
        state.config.pricing_url.clone(),
        state.registry.as_ref(),
        PRICING_APP,
    ) {
        Some(endpoint) => {
            info!(?endpoint, "Price enrichment enabled");
            service = service.with_price_lookup(Arc::new(HttpPriceClient::new(endpoint)?));
        }
        None => warn!("No pricing service configured, cars are served without prices"),
    }

    match ServiceEndpoint::resolve_from(
        state.config.maps_url.clone(),
        state.registry.as_ref(),
        MAPS_APP,
    ) {
        Some(endpoint) => {
            info!(?endpoint, "Address enrichment enabled");
            service = service.with_address_lookup(Arc::new(HttpMapsClient::new(endpoint)?));
        }
        None => warn!("No maps service configured, cars are served without addresses"),
    }

    Ok(handlers::router(service))
}

/// Router with the `/ready` endpoint, merged next to the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
