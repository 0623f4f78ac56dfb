//! Two point conversion tracking across plays.
//!
//! The simulator tags every play of a conversion attempt with the converting
//! team. The attempt closes on the first untagged play; if nothing scored in
//! between, the logger has to narrate the failure itself.

use log::{debug, warn};
use play_rules::{PlayEvent, Side};

/// Where the current game stands with respect to a conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionState {
    #[default]
    Idle,
    /// An attempt by this team is pending.
    Attempting(Side),
    /// The last attempt scored.
    Resolved,
}

impl ConversionState {
    /// Advance the state for one play.
    ///
    /// Returns the team whose attempt this play closed without a score; the
    /// caller narrates that failure before the play itself.
    pub fn advance(&mut self, play: &PlayEvent) -> Option<Side> {
        match (play.two_point_conversion_team, *self) {
            (Some(team), current) => {
                match current {
                    ConversionState::Attempting(pending) if pending != team => {
                        warn!(
                            "conversion attempt by team {} overlaps pending attempt by team {}",
                            team, pending
                        );
                        *self = ConversionState::Attempting(team);
                    }
                    ConversionState::Attempting(_) => {}
                    _ => {
                        debug!("team {} is attempting a two point conversion", team);
                        *self = ConversionState::Attempting(team);
                    }
                }
                if play.is_touchdown() {
                    debug!("two point conversion attempt by team {} scored", team);
                    *self = ConversionState::Resolved;
                }
                None
            }
            (None, ConversionState::Attempting(team)) => {
                if play.is_touchdown() {
                    *self = ConversionState::Resolved;
                    None
                } else {
                    debug!("two point conversion attempt by team {} failed", team);
                    *self = ConversionState::Idle;
                    Some(team)
                }
            }
            (None, _) => None,
        }
    }
}
