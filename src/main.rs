//! Cinema API server
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ request id → trace → timeout → body limit
//!                                                         │
//!                                                         ▼
//!                                                   axum router
//!                                                         │
//!                                   ┌─────────────────────┴───────────────┐
//!                                   │ GET                   POST/PUT/DELETE│
//!                                   │                       bearer gate    │
//!                                   └─────────────────────┬───────────────┘
//!                                                         ▼
//!                                          actors / movies handlers
//!                                                         │
//!                                                         ▼
//!                                      StoreHolder → MongoDB (or memory)
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cinema_api::config::{load_config, StoreBackend};
use cinema_api::lifecycle;
use cinema_api::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "cinema-api")]
#[command(about = "Actors & Movies REST API", long_about = None)]
struct Cli {
    /// TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Run against the in-memory store instead of MongoDB.
    #[arg(long)]
    memory: bool,

    /// Write the OpenAPI document to this path and exit.
    #[arg(long, value_name = "PATH")]
    export_openapi: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.memory {
        config.database.backend = StoreBackend::Memory;
    }

    init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cinema-api starting");

    if let Some(path) = cli.export_openapi {
        return match cinema_api::api::docs::write_openapi(&path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "Failed to export OpenAPI document");
                ExitCode::FAILURE
            }
        };
    }

    tracing::info!(
        bind_address = %config.server.bind_address(),
        backend = ?config.database.backend,
        auth_enabled = config.auth.enabled,
        "Configuration loaded"
    );

    match lifecycle::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}
