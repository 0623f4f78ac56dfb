//! The serializable box-score document and the records it carries.
//!
//! The document is what crosses the persistence/transport boundary between
//! the simulation and the presentation layer.

mod entries;

pub use entries::*;

use play_rules::{GameId, TeamInfo};
use serde::{Deserialize, Serialize};

/// Game metadata supplied by the host when the box score is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreMeta {
    pub gid: GameId,
    pub teams: [TeamInfo; 2],
    pub num_periods: u32,
}

/// One team's line in the box score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLine {
    #[serde(flatten)]
    pub info: TeamInfo,
    pub pts: u32,
}

/// The complete box-score document for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScore {
    pub gid: GameId,
    pub teams: [TeamLine; 2],
    pub num_periods: u32,
    pub scoring_summary: Vec<ScoringSummaryEntry>,

    /// Present only when narration was requested for the game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_by_play: Option<Vec<PlayByPlayEntry>>,
}

impl BoxScore {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Final score as `[home, away]`.
    pub fn final_score(&self) -> [u32; 2] {
        [self.teams[0].pts, self.teams[1].pts]
    }
}
