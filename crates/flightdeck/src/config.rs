//! Configuration management for flightdeck.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightdeck";

/// Default location of the flight dataset, relative to the working directory.
const DEFAULT_DATABASE_PATH: &str = "data/flights.sqlite3";

/// Fixed name of the route map artifact.
const DEFAULT_MAP_PATH: &str = "flight_delays_map.html";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTDECK_`, with `__`
///    separating nesting: `FLIGHTDECK_STORE__DATABASE_PATH`)
/// 2. TOML config file at `~/.config/flightdeck/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store configuration.
    pub store: StoreConfig,
    /// Map renderer configuration.
    pub map: MapConfig,
}

/// Store-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite flight dataset.
    /// Defaults to `data/flights.sqlite3`.
    pub database_path: PathBuf,
}

/// Map-renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Path the route map artifact is written to.
    /// Defaults to `flight_delays_map.html`.
    pub output_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_MAP_PATH),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if it exists)
    /// 3. Environment variables (prefixed with `FLIGHTDECK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("FLIGHTDECK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.store.database_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "store.database_path must not be empty".to_string(),
            });
        }

        if self.map.output_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "map.output_path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Path to the SQLite flight dataset.
    #[must_use]
    pub fn database_path(&self) -> &PathBuf {
        &self.store.database_path
    }

    /// Path the route map artifact is written to.
    #[must_use]
    pub fn map_output_path(&self) -> &PathBuf {
        &self.map.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(
            config.store.database_path,
            PathBuf::from("data/flights.sqlite3")
        );
        assert_eq!(
            config.map.output_path,
            PathBuf::from("flight_delays_map.html")
        );
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_database_path() {
        let mut config = Config::default();
        config.store.database_path = PathBuf::new();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("store.database_path"));
    }

    #[test]
    fn test_validate_empty_map_path() {
        let mut config = Config::default();
        config.map.output_path = PathBuf::new();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("map.output_path"));
    }

    #[test]
    fn test_database_path_accessor() {
        let mut config = Config::default();
        config.store.database_path = PathBuf::from("/custom/flights.db");

        assert_eq!(config.database_path(), &PathBuf::from("/custom/flights.db"));
    }

    #[test]
    fn test_map_output_path_accessor() {
        let mut config = Config::default();
        config.map.output_path = PathBuf::from("/tmp/map.html");

        assert_eq!(config.map_output_path(), &PathBuf::from("/tmp/map.html"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("flightdeck"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_overrides_database_path() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FLIGHTDECK_STORE__DATABASE_PATH", "/env/flights.sqlite3");

            let config =
                Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
            assert_eq!(
                config.store.database_path,
                PathBuf::from("/env/flights.sqlite3")
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_map_output_path() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FLIGHTDECK_MAP__OUTPUT_PATH", "/tmp/env_map.html");

            let config =
                Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
            assert_eq!(config.map.output_path, PathBuf::from("/tmp/env_map.html"));
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("database_path"));
        assert!(json.contains("output_path"));
    }

    #[test]
    fn test_store_config_deserialize() {
        let json = r#"{"database_path": "/data/other.sqlite3"}"#;
        let store: StoreConfig = serde_json::from_str(json).unwrap();
        assert_eq!(store.database_path, PathBuf::from("/data/other.sqlite3"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
