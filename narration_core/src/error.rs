//! Errors raised by the narration producer and its configuration.

use play_rules::{PlayKind, RulesError};
use thiserror::Error;

/// A contract violation by the caller of the event logger.
///
/// These signal a defect in the upstream simulator. The logger appends
/// nothing for a call that fails.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("{kind} play is missing required field `{field}`")]
    MissingField {
        kind: PlayKind,
        field: &'static str,
    },

    #[error("{kind} play needs {expected} participant name(s), got {found}")]
    MissingNames {
        kind: PlayKind,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("malformed play event: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse narration config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("a game needs at least one period, got {0}")]
    InvalidPeriods(u32),
}
