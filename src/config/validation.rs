//! Configuration validation.
//!
//! Serde handles syntax; this module checks values that parse fine but
//! cannot work at runtime. All problems are reported at once.

use std::fmt;

use crate::config::schema::{AppConfig, StoreBackend};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. `auth.token`).
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully assembled configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::new("server.host", "must not be empty"));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "server.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.database.backend == StoreBackend::Mongodb {
        let uri = config.database.uri.trim();
        if uri.is_empty() {
            errors.push(ValidationError::new("database.uri", "must not be empty"));
        } else if !(uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")) {
            errors.push(ValidationError::new(
                "database.uri",
                "must start with mongodb:// or mongodb+srv://",
            ));
        }
        if config.database.connect_timeout_secs == 0 {
            errors.push(ValidationError::new(
                "database.connect_timeout_secs",
                "must be greater than zero",
            ));
        }
    }
    if let Some(name) = &config.database.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("database.name", "must not be blank when set"));
        }
    }

    if config.auth.enabled {
        let missing = config
            .auth
            .token
            .as_deref()
            .map(|t| t.trim().is_empty())
            .unwrap_or(true);
        if missing {
            errors.push(ValidationError::new(
                "auth.token",
                "is required when auth is enabled",
            ));
        }
    }

    if config.docs.enabled && (!config.docs.path.starts_with('/') || config.docs.path == "/") {
        errors.push(ValidationError::new(
            "docs.path",
            "must start with '/' and not be the root path",
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new(
            "security.max_body_size",
            "must be greater than zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
