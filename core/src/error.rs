//! Storage and configuration errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read/write workout log: {0}")]
    Io(#[from] std::io::Error),

    /// The log file exists but is not a valid array of workout records.
    #[error("Failed to parse workout log: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize workout log: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}
