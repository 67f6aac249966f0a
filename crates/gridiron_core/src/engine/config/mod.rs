//! # Simulator configuration
//!
//! Every tunable of the drive simulator lives here.
//!
//! ## Usage
//! ```rust
//! use gridiron_core::engine::config::SimConfig;
//!
//! let flat = SimConfig::default();
//! let hex = SimConfig::hex();
//! assert!(flat.validate().is_ok() && hex.validate().is_ok());
//! ```

mod play_table;

pub use play_table::{PlayProfile, PlayTable};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

use super::field::FieldVariant;
use super::play_log::DEFAULT_LOG_CAPACITY;
use crate::error::{DriveError, Result};

/// Env var pointing at a config file (JSON, or YAML by extension)
pub const CONFIG_PATH_ENV: &str = "GRIDIRON_CONFIG_PATH";

/// What happens after the offense is driven into its own end zone (hex field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafetyHandling {
    /// Spot the ball and end the play, like a touchdown
    #[default]
    EndPlay,
    /// Spot the ball, then still run the first-down/turnover checks
    /// against the freshly reset distance
    ContinueToDownCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub variant: FieldVariant,
    pub safety_handling: SafetyHandling,
    /// Play-log lines kept, newest first
    pub log_capacity: usize,
    pub play_table: PlayTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            variant: FieldVariant::Flat,
            safety_handling: SafetyHandling::EndPlay,
            log_capacity: DEFAULT_LOG_CAPACITY,
            play_table: PlayTable::default(),
        }
    }
}

impl SimConfig {
    /// Flat yard-line field (default)
    pub fn flat() -> Self {
        Self::default()
    }

    /// Isometric hex-grid field with end zones and safeties
    pub fn hex() -> Self {
        Self { variant: FieldVariant::Hex, ..Self::default() }
    }

    pub fn with_safety_handling(mut self, handling: SafetyHandling) -> Self {
        self.safety_handling = handling;
        self
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a config file; `.yaml`/`.yml` parse as YAML, anything else as JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config = if is_yaml { Self::from_yaml(&content)? } else { Self::from_json(&content)? };
        config.validate()?;
        log::debug!("Loaded sim config from {}", path.display());
        Ok(config)
    }

    /// Config named by [`CONFIG_PATH_ENV`], if set and non-empty
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(None);
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        Self::load(Path::new(path)).map(Some)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_capacity == 0 {
            return Err(DriveError::InvalidConfig("log_capacity must be >= 1".to_string()));
        }
        self.play_table.validate(self.variant).map_err(DriveError::InvalidConfig)
    }
}
