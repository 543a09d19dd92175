//! Rohan Mobile Store API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{connect_from_config_with_retry, DocumentStore, MongoDocumentStore};
use mobile_store_api::{build_router, AppState, Config};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The server starts without a database; reads then fall back to sample data.
    let (store, mongo_client) = match &config.mongodb {
        Some(mongodb) => match connect_from_config_with_retry(mongodb, None).await {
            Ok(client) => {
                let store = MongoDocumentStore::new(client.database(mongodb.database()));
                (store, Some(client))
            }
            Err(e) => {
                warn!(error = %e, "Could not connect to MongoDB, starting without a database");
                (MongoDocumentStore::unavailable(), None)
            }
        },
        None => {
            warn!("DATABASE_URL or DATABASE_NAME not set, starting without a database");
            (MongoDocumentStore::unavailable(), None)
        }
    };

    if let Some(name) = store.database_name() {
        info!(database = %name, "Using MongoDB database");
    }

    let state = AppState::new(config.clone(), Arc::new(store));
    let app = build_router(state)?;

    info!("Starting {} on port {}", config.app.name, config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(client) = mongo_client {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Mobile Store API shutdown complete");
    Ok(())
}
