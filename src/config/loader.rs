//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{AppConfig, StoreBackend};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {message}")]
    Env { var: &'static str, message: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the optional TOML file, then
/// environment overrides. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Recognized variables: `MONGODB_URI`, `DATABASE_NAME`, `STORE_BACKEND`,
/// `HOST`, `PORT`, `API_TOKEN`, `SWAGGER_OUTPUT`, `LOG_LEVEL`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(uri) = var("MONGODB_URI") {
        config.database.uri = uri;
    }
    if let Some(name) = var("DATABASE_NAME") {
        config.database.name = Some(name);
    }
    if let Some(backend) = var("STORE_BACKEND") {
        config.database.backend = backend
            .parse::<StoreBackend>()
            .map_err(|message| ConfigError::Env {
                var: "STORE_BACKEND",
                message,
            })?;
    }
    if let Some(host) = var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("PORT") {
        config.server.port = port.trim().parse().map_err(|_| ConfigError::Env {
            var: "PORT",
            message: format!("'{}' is not a valid port", port),
        })?;
    }
    if let Some(token) = var("API_TOKEN") {
        config.auth.token = Some(token);
        config.auth.enabled = true;
    }
    if let Some(output) = var("SWAGGER_OUTPUT") {
        config.docs.output_path = Some(PathBuf::from(output));
    }
    if let Some(level) = var("LOG_LEVEL") {
        config.observability.log_level = level;
    }

    Ok(())
}
