//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file with environment variable
//! overrides for proxy credentials.
//!
//! # Example
//!
//! ```no_run
//! use capitoltrades::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::api::ApiConfig;
use super::logging::LoggingConfig;
use super::proxy::ProxyConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields [`Config::default`]
/// (direct connection to the public backend).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Upstream API settings: base URL, timeouts, paging, retries.
    #[serde(default)]
    pub api: ApiConfig,

    /// Proxy egress endpoints.
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads proxy credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.proxy.load_credentials();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    /// (still picking up proxy credentials from the environment).
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        Self::parse_toml("")
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.proxy.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
