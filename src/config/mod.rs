//! Client configuration module
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NEUROMETRICA_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use neurometrica_client::config::ClientConfig;
//!
//! let config = ClientConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root client configuration
///
/// Load using [`ClientConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Backend API configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `NEUROMETRICA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `NEUROMETRICA__API__BASE_URL=http://localhost:8000` -> `api.base_url`
    /// - `NEUROMETRICA__API__TIMEOUT_SECS=30` -> `api.timeout_secs`
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
                    .prefix("NEUROMETRICA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn loads_with_no_env_vars_set() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("NEUROMETRICA__API__BASE_URL");
        env::remove_var("NEUROMETRICA__API__TIMEOUT_SECS");

        let config = ClientConfig::load().unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NEUROMETRICA__API__BASE_URL", "https://pruebas.example.com");
        env::set_var("NEUROMETRICA__API__TIMEOUT_SECS", "30");

        let config = ClientConfig::load().unwrap();
        assert_eq!(config.api.base_url, "https://pruebas.example.com");
        assert_eq!(config.api.timeout_secs, 30);

        env::remove_var("NEUROMETRICA__API__BASE_URL");
        env::remove_var("NEUROMETRICA__API__TIMEOUT_SECS");
    }
}
