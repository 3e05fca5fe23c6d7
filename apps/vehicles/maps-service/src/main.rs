//! Maps service: `GET /maps?lat=&lon=`.

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use discovery::Registration;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let registration = match config.discovery.client()? {
        Some(client) => {
            let instance = config.discovery.instance(config.app.name, config.server.port);
            Some(Registration::start(client, instance, config.discovery.heartbeat_interval).await)
        }
        None => None,
    };

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes()).await?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router());

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(registration) = registration {
            registration.deregister().await;
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Maps service shutdown complete");
    Ok(())
}
