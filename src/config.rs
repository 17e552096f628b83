// Settings for the demo run, read from TOML.
// Every field has a default, so an absent file means default behavior.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const MIN_ADVANCED_DEPTH: u8 = 1;
pub const MAX_ADVANCED_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Advanced layers wrapped around the programming skill.
    pub advanced_depth: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            advanced_depth: 1,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ADVANCED_DEPTH..=MAX_ADVANCED_DEPTH).contains(&self.advanced_depth) {
            return Err(ConfigError::OutOfRange {
                field: "advanced_depth",
                value: self.advanced_depth.into(),
                min: MIN_ADVANCED_DEPTH.into(),
                max: MAX_ADVANCED_DEPTH.into(),
            });
        }
        Ok(())
    }
}
