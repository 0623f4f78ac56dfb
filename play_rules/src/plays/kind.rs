//! The closed set of play types the simulator reports.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RulesError;

/// Every discrete play sub-action the simulation engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayKind {
    /// Start of a numbered quarter.
    Quarter,
    /// Start of overtime.
    Overtime,
    Kickoff,
    KickoffReturn,
    Punt,
    PuntReturn,
    ExtraPoint,
    FieldGoal,
    Fumble,
    FumbleRecovery,
    Interception,
    Sack,
    Dropback,
    PassComplete,
    PassIncomplete,
    Handoff,
    Run,
    Injury,
}

impl PlayKind {
    pub const ALL: [PlayKind; 18] = [
        PlayKind::Quarter,
        PlayKind::Overtime,
        PlayKind::Kickoff,
        PlayKind::KickoffReturn,
        PlayKind::Punt,
        PlayKind::PuntReturn,
        PlayKind::ExtraPoint,
        PlayKind::FieldGoal,
        PlayKind::Fumble,
        PlayKind::FumbleRecovery,
        PlayKind::Interception,
        PlayKind::Sack,
        PlayKind::Dropback,
        PlayKind::PassComplete,
        PlayKind::PassIncomplete,
        PlayKind::Handoff,
        PlayKind::Run,
        PlayKind::Injury,
    ];

    /// The wire name of this play type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayKind::Quarter => "quarter",
            PlayKind::Overtime => "overtime",
            PlayKind::Kickoff => "kickoff",
            PlayKind::KickoffReturn => "kickoffReturn",
            PlayKind::Punt => "punt",
            PlayKind::PuntReturn => "puntReturn",
            PlayKind::ExtraPoint => "extraPoint",
            PlayKind::FieldGoal => "fieldGoal",
            PlayKind::Fumble => "fumble",
            PlayKind::FumbleRecovery => "fumbleRecovery",
            PlayKind::Interception => "interception",
            PlayKind::Sack => "sack",
            PlayKind::Dropback => "dropback",
            PlayKind::PassComplete => "passComplete",
            PlayKind::PassIncomplete => "passIncomplete",
            PlayKind::Handoff => "handoff",
            PlayKind::Run => "run",
            PlayKind::Injury => "injury",
        }
    }
}

impl FromStr for PlayKind {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RulesError::UnknownPlayType(s.to_string()))
    }
}

impl std::fmt::Display for PlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
