//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use betledger::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::display::DisplayConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Odds notation, locale and timezone used for display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Ledger and preference file locations.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, treating a missing file as all defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.display.validate()?;
        Ok(())
    }

    /// Initialize tracing from the logging section and `-v` count.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}
