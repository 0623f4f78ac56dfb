//! Scoring Summary - condenses a scoring log into box-score rows.
//!
//! The compression works as follows:
//! 1. **Filter**: Skip hidden entries
//! 2. **Classify**: Recover each entry's score effect from its text, dropping
//!    entries with no scoring phrase
//! 3. **Accumulate**: Update the running `[home, away]` score
//! 4. **Merge**: Fold an extra point, or a same-side two point conversion,
//!    into the row before it
//!
//! Quarter headers for display are added separately by [`group_by_quarter`].

mod classify;
mod grouping;

pub use classify::*;
pub use grouping::*;

use log::debug;
use play_rules::{QuarterLabel, ScoreType, Side};
use serde::{Deserialize, Serialize};

use crate::box_score::ScoringSummaryEntry;

/// One renderable scoreboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondensedRow {
    #[serde(rename = "t")]
    pub side: Side,

    /// Running score after this row, `[home, away]`.
    pub score: [u32; 2],

    /// Always set by [`process_events`]; optional in the serialized form.
    pub score_type: Option<ScoreType>,

    pub text: String,
    pub quarter: QuarterLabel,
    pub time: String,
}

/// Compress a time-ordered scoring log into display rows.
///
/// Pure: the same input always gives the same rows.
pub fn process_events(events: &[ScoringSummaryEntry]) -> Vec<CondensedRow> {
    let mut rows: Vec<CondensedRow> = Vec::new();
    let mut score = [0u32; 2];

    for event in events.iter().filter(|event| !event.hidden) {
        let Some(effect) = classify(&event.text) else {
            debug!("skipping scoring entry with no scoring phrase: {}", event.text);
            continue;
        };
        score[effect.scoring_side(event.side).index()] += effect.points;

        let merge = match (rows.last(), effect.score_type) {
            (Some(_), ScoreType::ExtraPoint) => true,
            (Some(previous), ScoreType::TwoPointConversion) => previous.side == event.side,
            _ => false,
        };

        if merge {
            if let Some(previous) = rows.last_mut() {
                previous.score = score;
                previous.text.push_str(&format!(" ({})", event.text));
                continue;
            }
        }

        rows.push(CondensedRow {
            side: event.side,
            score,
            score_type: Some(effect.score_type),
            text: event.text.clone(),
            quarter: event.quarter,
            time: event.time.clone(),
        });
    }

    rows
}

/// Memoizing front for [`process_events`].
///
/// Scoring logs are append-only, so the number of visible entries is enough
/// to tell whether a log has changed since the last call.
#[derive(Debug, Clone, Default)]
pub struct ScoringCompressor {
    cached: Option<(usize, Vec<CondensedRow>)>,
}

impl ScoringCompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Condensed rows for `events`, recomputed only when the count of
    /// visible entries changed.
    pub fn rows(&mut self, events: &[ScoringSummaryEntry]) -> &[CondensedRow] {
        let visible = events.iter().filter(|event| !event.hidden).count();

        let stale = !matches!(&self.cached, Some((count, _)) if *count == visible);
        if stale {
            debug!("rebuilding scoring summary for {} visible events", visible);
            self.cached = None;
        }

        let (_, rows) = self
            .cached
            .get_or_insert_with(|| (visible, process_events(events)));
        rows
    }

    /// Drop the cached rows.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
