//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ESTIMATOR` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working server.
//!
//! # Example
//!
//! ```no_run
//! use mumbai_price_estimator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod branding;
mod error;
mod server;

pub use branding::BrandingConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Page branding and client list
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ESTIMATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ESTIMATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ESTIMATOR__BRANDING__CLIENTS=A,B` -> `branding.clients = "A,B"`
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
                    .prefix("ESTIMATOR")
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
        self.branding.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("ESTIMATOR__SERVER__PORT");
        env::remove_var("ESTIMATOR__SERVER__ENVIRONMENT");
        env::remove_var("ESTIMATOR__BRANDING__CLIENTS");
        env::remove_var("ESTIMATOR__BRANDING__DEFAULT_CLIENT");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.branding.product_name, "Mumbai House Price Estimator");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ESTIMATOR__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ESTIMATOR__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_client_list() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ESTIMATOR__BRANDING__CLIENTS", "Acme Homes,Bandra Brokers");
        env::set_var("ESTIMATOR__BRANDING__DEFAULT_CLIENT", "Bandra Brokers");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.branding.clients_list(), vec!["Acme Homes", "Bandra Brokers"]);
        assert_eq!(config.branding.default_client().as_deref(), Some("Bandra Brokers"));
        assert!(config.validate().is_ok());
    }
}
