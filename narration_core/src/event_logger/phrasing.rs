//! Text rules: one phrasing per play type.

use play_rules::{ordinal, PeriodNaming, PlayEvent, PlayKind, StandardPeriodNames};

use crate::NarrationError;

/// Render the narration text for a play.
///
/// Fails when a field the play type needs is absent.
pub(crate) fn narrate(play: &PlayEvent, num_periods: u32) -> Result<String, NarrationError> {
    let text = match play.kind {
        PlayKind::Quarter => {
            let quarter = require(play, play.quarter, "quarter")?;
            format!(
                "Start of {} {}",
                ordinal(quarter),
                StandardPeriodNames.period_name(num_periods)
            )
        }
        PlayKind::Overtime => "Start of overtime".to_string(),
        PlayKind::Kickoff => {
            let kicker = name(play, 0)?;
            let yards = require(play, play.yards, "yds")?;
            if require(play, play.touchback, "touchback")? {
                format!("{} kicked off for a touchback", kicker)
            } else if yards < 0 {
                format!("{} kicked off into the end zone", kicker)
            } else {
                format!("{} kicked off to the {} yard line", kicker, yards)
            }
        }
        PlayKind::KickoffReturn => {
            format!("{} returned the kickoff {}", name(play, 0)?, movement(play)?)
        }
        PlayKind::Punt => {
            let punter = name(play, 0)?;
            let yards = require(play, play.yards, "yds")?;
            if require(play, play.touchback, "touchback")? {
                format!("{} punted for a touchback", punter)
            } else {
                format!("{} punted {} yards", punter, yards)
            }
        }
        PlayKind::PuntReturn => {
            format!("{} returned the punt {}", name(play, 0)?, movement(play)?)
        }
        PlayKind::ExtraPoint => {
            let made = require(play, play.made, "made")?;
            format!("{} {} the extra point", name(play, 0)?, made_or_missed(made))
        }
        PlayKind::FieldGoal => {
            let made = require(play, play.made, "made")?;
            let yards = require(play, play.yards, "yds")?;
            format!(
                "{} {} the {} yard field goal",
                name(play, 0)?,
                made_or_missed(made),
                yards
            )
        }
        PlayKind::Fumble => format!("{} fumbled the ball!", name(play, 0)?),
        PlayKind::FumbleRecovery => {
            let recoverer = name(play, 0)?;
            require_movement(play)?;
            let lost = require(play, play.lost, "lost")?;
            if play.is_safety() {
                format!("{} recovered the fumble in the end zone, resulting in a safety!", recoverer)
            } else if play.is_touchback() {
                format!("{} recovered the fumble in the end zone, resulting in a touchback", recoverer)
            } else if lost {
                format!(
                    "{} recovered the fumble for the defense and returned it {}",
                    recoverer,
                    movement(play)?
                )
            } else {
                let carried = movement(play)?;
                if play.is_touchdown() {
                    format!("{} recovered the fumble for the offense and ran {}", recoverer, carried)
                } else {
                    format!("{} recovered the fumble for the offense", recoverer)
                }
            }
        }
        PlayKind::Interception => {
            let defender = name(play, 0)?;
            require_movement(play)?;
            if play.is_touchback() {
                format!("{} intercepted the pass in the end zone", defender)
            } else {
                format!("{} intercepted the pass and returned it {}", defender, movement(play)?)
            }
        }
        PlayKind::Sack => {
            let (qb, defender) = (name(play, 0)?, name(play, 1)?);
            let yards = require(play, play.yards, "yds")?;
            if play.is_safety() {
                format!("{} was sacked by {} in the end zone for a safety!", qb, defender)
            } else {
                format!("{} was sacked by {} for a {} yard loss", qb, defender, yards.abs())
            }
        }
        PlayKind::Dropback => format!("{} drops back to pass", name(play, 0)?),
        PlayKind::PassComplete => {
            let (qb, target) = (name(play, 0)?, name(play, 1)?);
            require_movement(play)?;
            if play.is_safety() {
                format!(
                    "{} completed a pass to {}, who was tackled in the end zone for a safety!",
                    qb, target
                )
            } else {
                format!("{} completed a pass to {} {}", qb, target, movement(play)?)
            }
        }
        PlayKind::PassIncomplete => {
            name(play, 0)?;
            format!("Incomplete pass to {}", name(play, 1)?)
        }
        PlayKind::Handoff => match play.names.get(1) {
            Some(runner) => format!("{} hands the ball off to {}", name(play, 0)?, runner),
            None => format!("{} keeps the ball", name(play, 0)?),
        },
        PlayKind::Run => {
            let runner = name(play, 0)?;
            require_movement(play)?;
            if play.is_safety() {
                format!("{} was tackled in the end zone for a safety!", runner)
            } else {
                format!("{} rushed {}", runner, movement(play)?)
            }
        }
        PlayKind::Injury => format!("{} was injured!", name(play, 0)?),
    };

    Ok(text)
}

/// What a touchdown is called in the context of this play.
pub(crate) fn touchdown_phrase(play: &PlayEvent) -> &'static str {
    match play.two_point_conversion_team {
        None => "a touchdown",
        Some(team) if team == play.side => "a two point conversion",
        Some(_) => "two points",
    }
}

/// Yardage suffix for plays that move the ball.
///
/// A conversion's own play hides the yardage on a score.
fn movement(play: &PlayEvent) -> Result<String, NarrationError> {
    let yards = require(play, play.yards, "yds")?;
    let touchdown = require(play, play.touchdown, "td")?;

    let text = if touchdown && play.is_conversion_play() {
        format!("for {}!", touchdown_phrase(play))
    } else if touchdown {
        format!("for {} yards and {}!", yards, touchdown_phrase(play))
    } else if yards == 0 {
        "for no gain".to_string()
    } else if yards < 0 {
        format!("for a loss of {} yards", yards.abs())
    } else {
        format!("for {} yards", yards)
    };

    Ok(text)
}

/// Plays that move the ball need yardage and a touchdown flag even when a
/// safety or touchback decides the text.
fn require_movement(play: &PlayEvent) -> Result<(), NarrationError> {
    require(play, play.yards, "yds")?;
    require(play, play.touchdown, "td")?;
    Ok(())
}

fn made_or_missed(made: bool) -> &'static str {
    if made {
        "made"
    } else {
        "missed"
    }
}

fn name(play: &PlayEvent, index: usize) -> Result<&str, NarrationError> {
    play.names
        .get(index)
        .map(String::as_str)
        .ok_or(NarrationError::MissingNames {
            kind: play.kind,
            expected: index + 1,
            found: play.names.len(),
        })
}

fn require<T>(play: &PlayEvent, value: Option<T>, field: &'static str) -> Result<T, NarrationError> {
    value.ok_or(NarrationError::MissingField {
        kind: play.kind,
        field,
    })
}
