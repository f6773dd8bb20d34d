//! Config management use case

use crate::domain::Periodicity;
use crate::error::{HabitrError, Result};
use crate::infrastructure::{Config, FileTrackerRepository, TrackerRepository};
use std::str::FromStr;

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileTrackerRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileTrackerRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "periodicity" => Ok(config.default_periodicity.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(HabitrError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: periodicity, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "periodicity" => {
                config.default_periodicity = Periodicity::from_str(value)?;
            }
            "created" => {
                return Err(HabitrError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(HabitrError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: periodicity",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
