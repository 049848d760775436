use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level daterange configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateRangeConfig {
    /// Pins "today" (YYYY-MM-DD); the system date is used when unset.
    #[serde(default)]
    pub today: Option<String>,

    /// Defaults applied when the command line leaves a field unset.
    #[serde(default)]
    pub defaults: DefaultsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    #[serde(default = "default_weekday")]
    pub weekday: u8,
    #[serde(default)]
    pub start_offset: i32,
    #[serde(default)]
    pub end_offset: i32,
    #[serde(default = "default_day_count")]
    pub day_count: u32,
    #[serde(default)]
    pub json: bool,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            weekday: default_weekday(),
            start_offset: 0,
            end_offset: 0,
            day_count: default_day_count(),
            json: false,
        }
    }
}

fn default_weekday() -> u8 {
    1
}
fn default_day_count() -> u32 {
    1
}

/// Loads the configuration at `path`, falling back to defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<DateRangeConfig> {
    if !path.exists() {
        return Ok(DateRangeConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
