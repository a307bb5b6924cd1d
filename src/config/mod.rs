//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TERRAIN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use terrain::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Profiles stored under {}", config.storage.data_dir.display());
//! ```

mod catalog;
mod error;
mod logging;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration (built-in catalog, file storage under `./data`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Question catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Profile storage backend
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TERRAIN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TERRAIN__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `TERRAIN__CATALOG__PATH=catalog.yaml` -> `catalog.path = "catalog.yaml"`
    /// - `TERRAIN__STORAGE__DATA_DIR=/var/lib/terrain` -> `storage.data_dir = ...`
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
                    .prefix("TERRAIN")
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
        self.logging.validate()?;
        self.catalog.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TERRAIN__LOGGING__LEVEL");
        env::remove_var("TERRAIN__LOGGING__JSON");
        env::remove_var("TERRAIN__CATALOG__PATH");
        env::remove_var("TERRAIN__STORAGE__BACKEND");
        env::remove_var("TERRAIN__STORAGE__DATA_DIR");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TERRAIN__LOGGING__LEVEL", "debug");
        env::set_var("TERRAIN__LOGGING__JSON", "true");
        env::set_var("TERRAIN__CATALOG__PATH", "catalog.yaml");
        env::set_var("TERRAIN__STORAGE__BACKEND", "memory");
        env::set_var("TERRAIN__STORAGE__DATA_DIR", "/tmp/terrain");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.catalog.path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/terrain"));
    }

    #[test]
    fn test_validate_rejects_bad_catalog_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TERRAIN__CATALOG__PATH", "catalog.txt");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCatalogPath)
        ));
    }
}
