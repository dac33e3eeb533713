//! Front-end configuration

use crate::error::{MoodlogError, Result};
use crate::infrastructure::storage::STORE_DIR;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many of today's records `moodlog today` shows
    pub recent_limit: usize,
    /// strftime pattern for record times
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recent_limit: 5,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Whether chrono can render `pattern` without hitting an unknown specifier
pub fn is_valid_time_format(pattern: &str) -> bool {
    !pattern.trim().is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

impl Config {
    /// Load config from .moodlog/config.toml, or defaults when it doesn't exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STORE_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config.toml, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(MoodlogError::Storage(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Time pattern to render with; falls back to the default if the stored
    /// one was hand-edited into something invalid
    pub fn time_pattern(&self) -> &str {
        if is_valid_time_format(&self.time_format) {
            &self.time_format
        } else {
            DEFAULT_TIME_FORMAT
        }
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let store_dir = path.join(STORE_DIR);

        if !store_dir.exists() {
            fs::create_dir_all(&store_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(store_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }
}
