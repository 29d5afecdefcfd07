//! Runtime configuration loaded from TOML.
//!
//! The embedded `configs/default.toml` is used unless the
//! `GREENHOUSE_CONFIG` environment variable points at another file.

use crate::core::SoilType;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV_VAR: &str = "GREENHOUSE_CONFIG";

const DEFAULT_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/configs/default.toml"
));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Pause after each tick, in milliseconds
    #[serde(default = "default_tick_delay_ms")]
    pub tick_delay_ms: u64,

    /// Seed for the sensor random source
    #[serde(default)]
    pub seed: Option<u64>,

    /// Preset to use instead of asking for the soil type
    #[serde(default)]
    pub soil: Option<SoilType>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            tick_delay_ms: default_tick_delay_ms(),
            seed: None,
            soil: None,
        }
    }
}

fn default_tick_delay_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: Logger,
    #[serde(default)]
    pub simulation: Simulation,
}

impl Config {
    /// Load from the file named by `GREENHOUSE_CONFIG`, or the embedded default.
    pub fn new() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(path),
            None => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Load from a specific file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Pause requested after each tick.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_delay_ms)
    }
}
