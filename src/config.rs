// File: src/config.rs
// Handles output tagging configuration and defaults.
use crate::paths::AppPaths;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_category() -> String {
    "Holidays".to_string()
}

fn default_class() -> String {
    "PUBLIC".to_string()
}

fn default_prodid() -> String {
    "-//paschal//Holiday Export//EN".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_class")]
    pub class: String,

    /// Emit a complete VCALENDAR document instead of bare VEVENT blocks.
    #[serde(default)]
    pub wrap_calendar: bool,

    #[serde(default = "default_prodid")]
    pub prodid: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            category: default_category(),
            class: default_class(),
            wrap_calendar: false,
            prodid: default_prodid(),
        }
    }
}

impl Config {
    /// Load the configuration from the platform config directory, falling
    /// back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = AppPaths::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }
}
