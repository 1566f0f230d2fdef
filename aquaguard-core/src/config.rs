//! Monitor configuration
//!
//! JSON-backed settings for an evaluation cycle. Every field is optional in
//! the file and falls back to the constants in `constants`:
//!
//! ```json
//! {
//!   "thresholds": { "good_max": 150, "moderate_max": 350 },
//!   "reading_count": 50,
//!   "seed": 42
//! }
//! ```
//!
//! Threshold values are taken as given. Nothing checks their range or
//! ordering.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    classifier::Thresholds,
    constants::DEFAULT_READING_COUNT,
    errors::{ConfigError, ConfigResult},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub thresholds: Thresholds,
    /// Readings generated per cycle
    pub reading_count: usize,
    /// Fixed rng seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            reading_count: DEFAULT_READING_COUNT,
            seed: None,
        }
    }
}

impl MonitorConfig {
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&text)?;

        log_debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
