use axum::{Router, routing::get};
use domain_pricing::{PgPriceRepository, PriceService, handlers};

use crate::state::AppState;

pub mod health;

/// `/prices` CRUD and the `/services/price` lookup.
pub fn routes(state: &AppState) -> Router {
    handlers::router(PriceService::new(PgPriceRepository::new(state.db.clone())))
}

pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
