//! Per-game narration settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings for one game's event logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Whether the full play-by-play is recorded. The scoring summary is
    /// always recorded.
    pub play_by_play: bool,

    /// Number of regulation periods, used to name them ("quarter", "half").
    pub num_periods: u32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            play_by_play: false,
            num_periods: 4,
        }
    }
}

impl NarrationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: NarrationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_periods == 0 {
            return Err(ConfigError::InvalidPeriods(self.num_periods));
        }
        Ok(())
    }

    /// Set whether the play-by-play is recorded.
    pub fn with_play_by_play(mut self, play_by_play: bool) -> Self {
        self.play_by_play = play_by_play;
        self
    }

    pub fn with_num_periods(mut self, num_periods: u32) -> Self {
        self.num_periods = num_periods;
        self
    }
}
