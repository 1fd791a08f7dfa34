//! TOML-based application configuration.
//!
//! Stored at `~/.treeni/config.toml`. Every field has a default, so a missing
//! file or an empty one yields [`Config::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::input::{DEFAULT_WEIGHT, WEIGHT_RANGE};

const DATA_DIR_NAME: &str = ".treeni";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Base directory for the workout log and config.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ConfigError::DataDir("Could not determine home directory".to_string()))?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workout log location. Defaults to `treenit.json` in the data directory.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Pre-filled body weight for new workouts.
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: f64,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            default_weight_kg: default_weight_kg(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Loads the config at `path`, falling back to defaults when it does not
    /// exist. A weight outside the accepted range is replaced by the default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        if !WEIGHT_RANGE.contains(&cfg.default_weight_kg) {
            warn!(weight = cfg.default_weight_kg, "default_weight_kg out of range, ignoring");
            cfg.default_weight_kg = default_weight_kg();
        }
        Ok(cfg)
    }
}
