//! Team identity: which side of the box score a play belongs to.

mod team;

pub use team::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RulesError;

/// Unique identifier for a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Create a new random game ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a game ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil game ID (useful for fixtures).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two teams in a game. Serialized as its index, 0 (home) or 1 (away).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Index into `[home, away]` arrays.
    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> u8 {
        side.index() as u8
    }
}

impl TryFrom<u8> for Side {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::Home),
            1 => Ok(Side::Away),
            other => Err(RulesError::InvalidSide(other)),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
