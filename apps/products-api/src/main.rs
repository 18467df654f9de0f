//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{self, ConnectionMonitor, ConnectionState};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        database = config.mongodb.database(),
        collection = %config.products.collection,
        guard_scope = %config.products.guard_scope,
        "Connecting to MongoDB"
    );

    let monitor = ConnectionMonitor::new();

    // An unreachable database does not stop startup: the guard answers 503
    // until the heartbeat sees the server.
    let client = match mongodb::connect_from_config_with_retry(&config.mongodb, None).await {
        Ok(client) => {
            monitor.set(ConnectionState::Connected);
            client
        }
        Err(e) => {
            warn!(error = %e, "MongoDB unreachable, starting disconnected");
            monitor.set(ConnectionState::Disconnected);
            mongodb::client_from_config(&config.mongodb).await?
        }
    };

    let heartbeat = monitor.spawn_heartbeat(client.clone(), config.mongodb.heartbeat_interval());

    let state = AppState::new(config, client, monitor);

    if state.monitor.is_connected() {
        if let Err(e) = api::init_indexes(&state).await {
            warn!(error = %e, "Index initialization failed, continuing without it");
        }
    } else {
        warn!("Skipping index initialization while MongoDB is unreachable");
    }

    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(api_routes)?
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.monitor.clone()));

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let server_config = state.config.server.clone();
    let AppState {
        client, monitor, ..
    } = state;

    create_production_app(app, &server_config, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing MongoDB connections");
        monitor.set(ConnectionState::Disconnecting);
        heartbeat.abort();
        client.shutdown().await;
        monitor.set(ConnectionState::Disconnected);
        info!("MongoDB connection closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
