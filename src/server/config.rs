//! Environment-backed server configuration.

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Settings read once at startup and owned by `main`.
pub struct Config {
    pub database_url: String,

    pub bind_address: String,
}

impl Config {
    /// Reads configuration from the process environment. `DATABASE_URL` is
    /// required; `BIND_ADDRESS` falls back to port 5000 on all interfaces.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
