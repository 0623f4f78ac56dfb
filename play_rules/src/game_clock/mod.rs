//! Game clock formatting and period labels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RulesError;

/// Render a clock value as `M:SS`.
///
/// The integer part of `clock` is the minute; the fractional part times 60,
/// floored, is the second. Negative values render as `0:00`.
pub fn format_clock(clock: f64) -> String {
    let clock = clock.max(0.0);
    let minutes = clock.trunc();
    let seconds = ((clock - minutes) * 60.0).floor().min(59.0);
    format!("{}:{:02}", minutes as u64, seconds as u64)
}

/// The period a play happened in. Serialized as `"Q1"`, `"Q2"`, ... or `"OT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum QuarterLabel {
    Quarter(u32),
    Overtime,
}

impl Default for QuarterLabel {
    fn default() -> Self {
        QuarterLabel::Quarter(1)
    }
}

impl std::fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuarterLabel::Quarter(n) => write!(f, "Q{}", n),
            QuarterLabel::Overtime => f.write_str("OT"),
        }
    }
}

impl FromStr for QuarterLabel {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "OT" {
            return Ok(QuarterLabel::Overtime);
        }
        s.strip_prefix('Q')
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n >= 1)
            .map(QuarterLabel::Quarter)
            .ok_or_else(|| RulesError::InvalidQuarterLabel(s.to_string()))
    }
}

impl From<QuarterLabel> for String {
    fn from(label: QuarterLabel) -> String {
        label.to_string()
    }
}

impl TryFrom<String> for QuarterLabel {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
