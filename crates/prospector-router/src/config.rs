//! Configuration file parsing for the Router.
//!
//! Loads the bind address plus the `[store]`, `[pipeline]` and `[fetch]`
//! sections from TOML.

use prospector_fetch::FetchConfig;
use prospector_pipeline::PipelineConfig;
use prospector_store::StoreConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A section failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Job store backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Pipeline settings applied to every job
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// HTTP settings for live fetching
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(contents)?;

        if config.bind_address.is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }
        config.pipeline.validate().map_err(ConfigError::Invalid)?;
        config.fetch.validate().map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    /// Create a default configuration for testing
    ///
    /// In-memory store, offline pipeline.
    pub fn default_test_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            store: StoreConfig::Memory,
            pipeline: PipelineConfig::offline(),
            fetch: FetchConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
