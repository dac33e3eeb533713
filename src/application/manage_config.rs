//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::config::is_valid_time_format;
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "recent_limit, time_format";

/// Service for managing front-end configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the journal at `root`
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "recent_limit" => Ok(config.recent_limit.to_string()),
            "time_format" => Ok(config.time_format),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;

        match key {
            "recent_limit" => {
                config.recent_limit = value.parse().map_err(|_| {
                    MoodlogError::Config(format!(
                        "recent_limit must be a non-negative whole number, got '{}'",
                        value
                    ))
                })?;
            }
            "time_format" => {
                if !is_valid_time_format(value) {
                    return Err(MoodlogError::Config(format!(
                        "time_format '{}' is not a valid strftime pattern",
                        value
                    )));
                }
                config.time_format = value.to_string();
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        config.save_to_dir(&self.root)
    }

    /// Current config, defaults included
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }
}
