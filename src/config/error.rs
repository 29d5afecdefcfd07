//! Configuration error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
