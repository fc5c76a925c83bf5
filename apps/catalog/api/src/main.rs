//! Catalog API - product CRUD over HTTP

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(storage = %config.storage, "Starting {} v{}", config.app.name, config.app.version);

    let storage = Storage::connect(&config).await?;
    let state = AppState {
        config: config.clone(),
        storage: storage.clone(),
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state))?;

    create_production_app(router, &config.server, async move {
        info!("Shutting down: releasing storage");
        storage.close().await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
