//! Scoring mechanics and period naming.

use serde::{Deserialize, Serialize};

/// The ways a team can put points on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreType {
    #[serde(rename = "TD")]
    Touchdown,
    #[serde(rename = "FG")]
    FieldGoal,
    #[serde(rename = "XP")]
    ExtraPoint,
    #[serde(rename = "2P")]
    TwoPointConversion,
    #[serde(rename = "SF")]
    Safety,
}

impl ScoreType {
    /// Points awarded when the score is successful.
    pub fn points(&self) -> u32 {
        match self {
            ScoreType::Touchdown => 6,
            ScoreType::FieldGoal => 3,
            ScoreType::ExtraPoint => 1,
            ScoreType::TwoPointConversion => 2,
            ScoreType::Safety => 2,
        }
    }

    /// Box-score abbreviation.
    pub fn abbrev(&self) -> &'static str {
        match self {
            ScoreType::Touchdown => "TD",
            ScoreType::FieldGoal => "FG",
            ScoreType::ExtraPoint => "XP",
            ScoreType::TwoPointConversion => "2P",
            ScoreType::Safety => "SF",
        }
    }
}

/// English ordinal for a period number: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Host-supplied lookup for what a period is called, given how many a game has.
pub trait PeriodNaming {
    fn period_name(&self, num_periods: u32) -> &str;
}

/// Halves for two periods, quarters for four, generic periods otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPeriodNames;

impl PeriodNaming for StandardPeriodNames {
    fn period_name(&self, num_periods: u32) -> &str {
        match num_periods {
            2 => "half",
            4 => "quarter",
            _ => "period",
        }
    }
}

impl<F> PeriodNaming for F
where
    F: Fn(u32) -> &'static str,
{
    fn period_name(&self, num_periods: u32) -> &str {
        self(num_periods)
    }
}
