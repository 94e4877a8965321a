//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PORTFOLIO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod portfolio;
mod server;

pub use database::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use portfolio::PortfolioConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, HTTP behavior)
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration (backend selection, PostgreSQL pool)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Portfolio query settings
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PORTFOLIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTFOLIO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PORTFOLIO__DATABASE__URL=...` -> `database.url = ...`
    /// - `PORTFOLIO__PORTFOLIO__DEFAULT_PROFILE_ID=1` -> `portfolio.default_profile_id = 1`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PORTFOLIO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.portfolio.validate()?;
        if self.server.is_production() && self.database.backend == StorageBackend::Memory {
            return Err(ValidationError::MemoryBackendInProduction);
        }
        Ok(())
    }
}
