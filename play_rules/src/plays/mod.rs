//! Play events as reported by the simulation engine.
//!
//! A [`PlayEvent`] is a loose record: every play type uses a different subset
//! of the fields, and which ones are required is decided by the narration
//! layer. The simulator builds one per play sub-action and hands it over.

mod kind;

pub use kind::*;

use serde::{Deserialize, Serialize};

use crate::Side;

/// One discrete play sub-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    #[serde(rename = "type")]
    pub kind: PlayKind,

    /// Team credited with the play. For a safety this is the team that was
    /// tackled, not the team that scores.
    #[serde(rename = "t")]
    pub side: Side,

    /// Minutes remaining in the period. The integer part is the minute and
    /// the fractional part is the fraction of a minute.
    pub clock: f64,

    /// Participants, primary actor first.
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default, rename = "yds", skip_serializing_if = "Option::is_none")]
    pub yards: Option<i32>,

    #[serde(default, rename = "td", skip_serializing_if = "Option::is_none")]
    pub touchdown: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub made: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touchback: Option<bool>,

    /// Quarter number, only for [`PlayKind::Quarter`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u32>,

    /// Set on every play that is part of a two point conversion attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_point_conversion_team: Option<Side>,
}

impl PlayEvent {
    /// Create a play with no optional fields set.
    pub fn new(kind: PlayKind, side: Side, clock: f64) -> Self {
        Self {
            kind,
            side,
            clock,
            names: Vec::new(),
            yards: None,
            touchdown: None,
            made: None,
            lost: None,
            safety: None,
            touchback: None,
            quarter: None,
            two_point_conversion_team: None,
        }
    }

    /// Start of the given quarter.
    pub fn quarter_start(quarter: u32) -> Self {
        Self::new(PlayKind::Quarter, Side::Home, 15.0).with_quarter(quarter)
    }

    /// Start of overtime.
    pub fn overtime_start() -> Self {
        Self::new(PlayKind::Overtime, Side::Home, 15.0)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_yards(mut self, yards: i32) -> Self {
        self.yards = Some(yards);
        self
    }

    pub fn with_touchdown(mut self, touchdown: bool) -> Self {
        self.touchdown = Some(touchdown);
        self
    }

    pub fn with_made(mut self, made: bool) -> Self {
        self.made = Some(made);
        self
    }

    pub fn with_lost(mut self, lost: bool) -> Self {
        self.lost = Some(lost);
        self
    }

    pub fn with_safety(mut self, safety: bool) -> Self {
        self.safety = Some(safety);
        self
    }

    pub fn with_touchback(mut self, touchback: bool) -> Self {
        self.touchback = Some(touchback);
        self
    }

    pub fn with_quarter(mut self, quarter: u32) -> Self {
        self.quarter = Some(quarter);
        self
    }

    /// Tag this play as part of a two point conversion attempt by `team`.
    pub fn with_conversion_team(mut self, team: Side) -> Self {
        self.two_point_conversion_team = Some(team);
        self
    }

    /// Whether the play ended in the end zone for a score. Absent means no.
    pub fn is_touchdown(&self) -> bool {
        self.touchdown.unwrap_or(false)
    }

    pub fn is_safety(&self) -> bool {
        self.safety.unwrap_or(false)
    }

    pub fn is_touchback(&self) -> bool {
        self.touchback.unwrap_or(false)
    }

    pub fn is_made(&self) -> bool {
        self.made.unwrap_or(false)
    }

    /// Whether this play is tagged as part of a conversion attempt.
    pub fn is_conversion_play(&self) -> bool {
        self.two_point_conversion_team.is_some()
    }
}
