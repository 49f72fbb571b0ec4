//! Startup orchestration.
//!
//! Order: configuration → logging → metrics → document store → docs file →
//! listener → serve. Any startup error is fatal; once serving, the process
//! only stops on shutdown, after which the store is closed.

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use super::shutdown::Shutdown;
use super::signals::spawn_signal_listener;
use crate::api::docs::write_openapi;
use crate::config::AppConfig;
use crate::http::{AppState, HttpServer};
use crate::observability::metrics::init_metrics;
use crate::store::{StoreError, StoreHolder};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("document store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to write OpenAPI document to {path}: {source}")]
    Docs {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connect the store, build state, and prepare the server without binding.
pub async fn prepare(config: AppConfig) -> Result<HttpServer, StartupError> {
    let holder = Arc::new(StoreHolder::new(config.database.clone()));
    holder.init().await?;

    if let Some(path) = &config.docs.output_path {
        write_openapi(path).map_err(|source| StartupError::Docs {
            path: path.display().to_string(),
            source,
        })?;
    }

    let mut state = AppState::new(config, holder);
    if state.config.observability.metrics_enabled {
        state = state.with_metrics(init_metrics()?);
    }

    Ok(HttpServer::new(state))
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let address = config.server.bind_address();

    let server = prepare(config).await?;
    let store = Arc::clone(&server.state().store);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!(address = %address, "Listening for connections");

    let shutdown = Shutdown::new();
    let signals = spawn_signal_listener(shutdown.clone());

    let result = server.run(listener, shutdown.subscribe()).await;
    signals.abort();
    store.close().await;

    result.map_err(StartupError::Serve)
}
