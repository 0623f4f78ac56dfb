//! Narration records: play-by-play entries and scoring summary entries.

use play_rules::{QuarterLabel, Side};
use serde::{Deserialize, Serialize};

use super::BoxScoreMeta;

/// A rendered line of play-by-play text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarratedEvent {
    #[serde(rename = "t")]
    pub side: Side,
    pub text: String,
    /// Clock as `M:SS`.
    pub time: String,
    pub quarter: QuarterLabel,
}

/// A stat credit recorded alongside the narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEvent {
    #[serde(rename = "t")]
    pub side: Side,
    pub player: String,
    pub stat: String,
    pub amount: i32,
}

/// One element of the play-by-play sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayByPlayEntry {
    /// Always first: the game metadata the rest of the sequence refers to.
    Init {
        #[serde(rename = "boxScore")]
        box_score: BoxScoreMeta,
    },
    Text(NarratedEvent),
    Stat(StatEvent),
}

impl PlayByPlayEntry {
    pub fn is_init(&self) -> bool {
        matches!(self, PlayByPlayEntry::Init { .. })
    }

    /// The narration text, for text entries.
    pub fn text(&self) -> Option<&str> {
        match self {
            PlayByPlayEntry::Text(event) => Some(&event.text),
            _ => None,
        }
    }
}

/// A narrated event that changed the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSummaryEntry {
    #[serde(rename = "t")]
    pub side: Side,
    pub quarter: QuarterLabel,
    pub time: String,
    pub text: String,

    /// Hidden entries are not shown yet (e.g. a game still being revealed live).
    #[serde(default)]
    pub hidden: bool,
}

impl ScoringSummaryEntry {
    pub fn new(side: Side, quarter: QuarterLabel, time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            side,
            quarter,
            time: time.into(),
            text: text.into(),
            hidden: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl From<&NarratedEvent> for ScoringSummaryEntry {
    fn from(event: &NarratedEvent) -> Self {
        Self {
            side: event.side,
            quarter: event.quarter,
            time: event.time.clone(),
            text: event.text.clone(),
            hidden: false,
        }
    }
}
