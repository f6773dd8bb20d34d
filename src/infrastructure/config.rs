//! Configuration management

use crate::domain::Periodicity;
use crate::error::{HabitrError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_periodicity: Periodicity,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(default_periodicity: Periodicity) -> Self {
        Config {
            default_periodicity,
            created: Utc::now(),
        }
    }

    /// Load config from .habitr/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".habitr").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HabitrError::NotHabitrDirectory(path.to_path_buf())
            } else {
                HabitrError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| HabitrError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .habitr/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let habitr_dir = path.join(".habitr");
        let config_path = habitr_dir.join("config.toml");

        // Ensure .habitr directory exists
        if !habitr_dir.exists() {
            fs::create_dir(&habitr_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| HabitrError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
