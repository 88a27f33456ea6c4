//! Application configuration.
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`USER_REGISTRY_LOG`, `USER_REGISTRY_FIRST_ID`)
//! 2. TOML config file
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "user-registry.toml";
pub const ENV_LOG_FILTER: &str = "USER_REGISTRY_LOG";
pub const ENV_FIRST_ID: &str = "USER_REGISTRY_FIRST_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("invalid setting {key} = {value}: {reason}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Settings for the in-memory user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the request channel in front of the store.
    pub buffer_size: usize,
    /// First identifier handed out on insert. Must be at least 1.
    pub first_id: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            first_id: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the file at `path` (when given), then applies environment overrides.
    pub fn load(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        config.apply_env_vars(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_vars(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(filter) = env(ENV_LOG_FILTER) {
            if EnvFilter::try_new(&filter).is_err() {
                return Err(ConfigError::InvalidEnv { name: ENV_LOG_FILTER, value: filter });
            }
            self.logging.filter = filter;
        }
        if let Some(value) = env(ENV_FIRST_ID) {
            match value.trim().parse::<i64>() {
                Ok(first_id) if first_id >= 1 => self.store.first_id = first_id,
                _ => return Err(ConfigError::InvalidEnv { name: ENV_FIRST_ID, value }),
            }
        }
        Ok(())
    }

    /// Checks values that came from the file (env values are checked as they are read).
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.first_id < 1 {
            return Err(ConfigError::InvalidSetting {
                key: "store.first_id",
                value: self.store.first_id.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::InvalidSetting {
                key: "logging.filter",
                value: self.logging.filter.clone(),
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}
