// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::error::Error;

use hotels_server::{
    api::router,
    config::ServerConfig,
    logging::init_tracing,
    state::{AppState, AuthConfig},
    storage::{InMemoryStore, JsonFileStore, SeedData, StoragePaths},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let state = build_state(&config)?;
    let app = router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Hotels server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Hotels server stopped");
    Ok(())
}

/// Pick the record store from `DATA_DIR` and apply `SEED_FILE`.
fn build_state(config: &ServerConfig) -> Result<AppState, Box<dyn Error>> {
    let seed = match &config.seed_file {
        Some(path) => {
            let seed = SeedData::from_file(path)?;
            tracing::info!(path = %path.display(), records = seed.len(), "Loaded seed file");
            seed
        }
        None => SeedData::default(),
    };

    let auth_config = AuthConfig::new(config.jwt_secret.as_str());

    match &config.data_dir {
        Some(dir) => {
            let mut store = JsonFileStore::new(StoragePaths::new(dir));
            store.initialize()?;
            if !seed.is_empty() {
                store.import(&seed)?;
            }
            tracing::info!(data_dir = %dir.display(), "Using JSON file store");
            Ok(AppState::new(store, auth_config))
        }
        None => {
            tracing::warn!("DATA_DIR not set, records are kept in memory only");
            Ok(AppState::new(InMemoryStore::from(seed), auth_config))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
