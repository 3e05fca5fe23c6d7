//! Vehicles API: car inventory at `/cars`.

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use discovery::Registration;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_with_retry(&config.database)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // The shared migrator also creates the `prices` table and its seed.
    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    let registry = config.discovery.client()?;
    let registration = match &registry {
        Some(client) => {
            let instance = config.discovery.instance(config.app.name, config.server.port);
            Some(
                Registration::start(
                    client.clone(),
                    instance,
                    config.discovery.heartbeat_interval,
                )
                .await,
            )
        }
        None => {
            info!("DISCOVERY_URL not set, skipping registry registration");
            None
        }
    };

    let state = AppState {
        config,
        db,
        registry,
    };

    let api_routes = api::routes(&state)?;
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // /health: liveness with name and version; /ready: database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting vehicles API with graceful shutdown (30s timeout)");

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        if let Some(registration) = registration {
            registration.deregister().await;
        }
        database::postgres::close(state.db).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Vehicles API shutdown complete");
    Ok(())
}
