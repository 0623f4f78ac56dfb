//! Score effect of a scoring entry, read back from its rendered text.
//!
//! The box score stores only text, so the summary has to recover what kind
//! of score each entry was. Documents serialized by older versions carry no
//! other marker.

use play_rules::{ScoreType, Side};

/// What a scoring entry did to the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEffect {
    pub score_type: ScoreType,
    pub points: u32,
}

impl ScoreEffect {
    fn new(score_type: ScoreType, scored: bool) -> Self {
        Self {
            score_type,
            points: if scored { score_type.points() } else { 0 },
        }
    }

    /// The side the points go to. A safety is narrated from the side of
    /// the team that was tackled.
    pub fn scoring_side(&self, side: Side) -> Side {
        match self.score_type {
            ScoreType::Safety => side.other(),
            _ => side,
        }
    }
}

/// Classify an entry by its text. `None` when no scoring phrase matches.
///
/// Matching is case sensitive except for the two point phrase, whose
/// capitalization differs between the play text and the failure text.
pub fn classify(text: &str) -> Option<ScoreEffect> {
    if text.contains("extra point") {
        return Some(ScoreEffect::new(ScoreType::ExtraPoint, text.contains("made")));
    }
    if text.contains("field goal") {
        return Some(ScoreEffect::new(ScoreType::FieldGoal, text.contains("made")));
    }
    if text.contains("touchdown") {
        return Some(ScoreEffect::new(ScoreType::Touchdown, true));
    }

    let lower = text.to_lowercase();
    if lower.contains("two point") {
        return Some(ScoreEffect::new(
            ScoreType::TwoPointConversion,
            !lower.contains("failed"),
        ));
    }
    if text.contains("safety") {
        return Some(ScoreEffect::new(ScoreType::Safety, true));
    }

    None
}
