//! Team descriptors carried into the box score.

use serde::{Deserialize, Serialize};

/// Display information for one team in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub abbrev: String,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbrev: abbrev.into(),
        }
    }
}
