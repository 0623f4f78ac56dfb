//! Event Logger - turns simulated plays into narration and a scoring log.
//!
//! The simulation loop calls [`EventLogger::log_event`] once per play
//! sub-action, in chronological order. Every call that changes the score is
//! appended to the scoring summary, whether or not the full play-by-play was
//! requested for the game.

mod conversion;
mod phrasing;

pub use conversion::*;

use log::trace;
use play_rules::{format_clock, PlayEvent, PlayKind, QuarterLabel, ScoreType, Side};

use crate::box_score::{
    BoxScore, BoxScoreMeta, NarratedEvent, PlayByPlayEntry, ScoringSummaryEntry, StatEvent, TeamLine,
};
use crate::{NarrationConfig, NarrationError};

/// Text of the entry synthesized when a conversion attempt closes without a score.
pub const FAILED_CONVERSION_TEXT: &str = "Two point conversion failed";

/// Where and when an event was logged.
#[derive(Debug, Clone)]
struct Stamp {
    time: String,
    quarter: QuarterLabel,
}

/// Per-game narration context. One logger per simulated game.
#[derive(Debug, Clone)]
pub struct EventLogger {
    config: NarrationConfig,

    /// `None` when the play-by-play was not requested.
    play_by_play: Option<Vec<PlayByPlayEntry>>,

    scoring_summary: Vec<ScoringSummaryEntry>,

    conversion: ConversionState,

    quarter: QuarterLabel,

    last_stamp: Option<Stamp>,

    score: [u32; 2],
}

impl EventLogger {
    /// Create a logger for a new game.
    ///
    /// # Errors
    ///
    /// Fails when the config does not pass [`NarrationConfig::validate`].
    pub fn new(config: NarrationConfig) -> Result<Self, NarrationError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create a logger that records only the scoring summary.
    pub fn with_defaults() -> Self {
        Self::from_valid_config(NarrationConfig::default())
    }

    fn from_valid_config(config: NarrationConfig) -> Self {
        let play_by_play = config.play_by_play.then(Vec::new);
        Self {
            config,
            play_by_play,
            scoring_summary: Vec::new(),
            conversion: ConversionState::default(),
            quarter: QuarterLabel::default(),
            last_stamp: None,
            score: [0, 0],
        }
    }

    /// Whether the full play-by-play is being recorded.
    pub fn is_active(&self) -> bool {
        self.play_by_play.is_some()
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// The label stamped on events logged now.
    pub fn quarter(&self) -> QuarterLabel {
        self.quarter
    }

    pub fn conversion_state(&self) -> ConversionState {
        self.conversion
    }

    /// Running score as `[home, away]`.
    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    pub fn scoring_summary(&self) -> &[ScoringSummaryEntry] {
        &self.scoring_summary
    }

    /// Narrate one play.
    ///
    /// # Errors
    ///
    /// Fails when the play lacks a field its type requires. Nothing is
    /// appended to either log for a failed call.
    pub fn log_event(&mut self, play: &PlayEvent) -> Result<(), NarrationError> {
        let text = phrasing::narrate(play, self.config.num_periods)?;

        let quarter = match (play.kind, play.quarter) {
            (PlayKind::Quarter, Some(n)) => QuarterLabel::Quarter(n),
            (PlayKind::Overtime, _) => QuarterLabel::Overtime,
            _ => self.quarter,
        };
        let stamp = Stamp {
            time: format_clock(play.clock),
            quarter,
        };

        if let Some(team) = self.conversion.advance(play) {
            let prior = self.last_stamp.clone().unwrap_or_else(|| Stamp {
                time: stamp.time.clone(),
                quarter: self.quarter,
            });
            self.record_failed_conversion(team, prior);
        }
        self.quarter = quarter;

        trace!("[{} {}] {}", stamp.quarter, stamp.time, text);

        let event = NarratedEvent {
            side: play.side,
            text,
            time: stamp.time.clone(),
            quarter,
        };

        if let Some((scorer, score_type)) = score_effect(play) {
            self.score[scorer.index()] += score_type.points();
            self.scoring_summary.push(ScoringSummaryEntry::from(&event));
        }
        if let Some(play_by_play) = self.play_by_play.as_mut() {
            play_by_play.push(PlayByPlayEntry::Text(event));
        }

        self.last_stamp = Some(stamp);
        Ok(())
    }

    /// Decode a play from its wire form and narrate it.
    pub fn log_json(&mut self, json: &str) -> Result<(), NarrationError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(kind) = value.get("type").and_then(|kind| kind.as_str()) {
            kind.parse::<PlayKind>()?;
        }
        let play: PlayEvent = serde_json::from_value(value)?;
        self.log_event(&play)
    }

    /// Record a stat credit. Ignored when the play-by-play is not recorded.
    pub fn log_stat(&mut self, side: Side, player: impl Into<String>, stat: impl Into<String>, amount: i32) {
        if let Some(play_by_play) = self.play_by_play.as_mut() {
            play_by_play.push(PlayByPlayEntry::Stat(StatEvent {
                side,
                player: player.into(),
                stat: stat.into(),
                amount,
            }));
        }
    }

    /// The play-by-play, led by a single `init` entry carrying `meta`.
    ///
    /// Returns `None` when the play-by-play was not requested, which is
    /// distinct from a game with no plays.
    pub fn get_play_by_play(&self, meta: BoxScoreMeta) -> Option<Vec<PlayByPlayEntry>> {
        self.play_by_play.as_ref().map(|events| {
            std::iter::once(PlayByPlayEntry::Init { box_score: meta })
                .chain(events.iter().cloned())
                .collect()
        })
    }

    /// Assemble the box-score document for this game.
    pub fn box_score(&self, meta: BoxScoreMeta) -> BoxScore {
        let [home, away] = meta.teams.clone();
        BoxScore {
            gid: meta.gid,
            teams: [
                TeamLine {
                    info: home,
                    pts: self.score[0],
                },
                TeamLine {
                    info: away,
                    pts: self.score[1],
                },
            ],
            num_periods: meta.num_periods,
            scoring_summary: self.scoring_summary.clone(),
            play_by_play: self.get_play_by_play(meta),
        }
    }

    fn record_failed_conversion(&mut self, team: Side, stamp: Stamp) {
        let event = NarratedEvent {
            side: team,
            text: FAILED_CONVERSION_TEXT.to_string(),
            time: stamp.time,
            quarter: stamp.quarter,
        };
        self.scoring_summary.push(ScoringSummaryEntry::from(&event));
        if let Some(play_by_play) = self.play_by_play.as_mut() {
            play_by_play.push(PlayByPlayEntry::Text(event));
        }
    }
}

/// Who scores, and how, on this play.
fn score_effect(play: &PlayEvent) -> Option<(Side, ScoreType)> {
    let narrates_safety = matches!(
        play.kind,
        PlayKind::Run | PlayKind::Sack | PlayKind::PassComplete | PlayKind::FumbleRecovery
    );
    if narrates_safety && play.is_safety() {
        return Some((play.side.other(), ScoreType::Safety));
    }

    match play.kind {
        PlayKind::ExtraPoint => play.is_made().then_some((play.side, ScoreType::ExtraPoint)),
        PlayKind::FieldGoal => play.is_made().then_some((play.side, ScoreType::FieldGoal)),
        PlayKind::KickoffReturn
        | PlayKind::PuntReturn
        | PlayKind::FumbleRecovery
        | PlayKind::Interception
        | PlayKind::PassComplete
        | PlayKind::Run
            if play.is_touchdown() && !play.is_touchback() =>
        {
            let score_type = if play.is_conversion_play() {
                ScoreType::TwoPointConversion
            } else {
                ScoreType::Touchdown
            };
            Some((play.side, score_type))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_rules::{GameId, TeamInfo};

    fn narrating() -> EventLogger {
        EventLogger::new(NarrationConfig::default().with_play_by_play(true)).unwrap()
    }

    fn meta() -> BoxScoreMeta {
        BoxScoreMeta {
            gid: GameId::nil(),
            teams: [TeamInfo::new("Hawks", "HAW"), TeamInfo::new("Owls", "OWL")],
            num_periods: 4,
        }
    }

    fn run(side: Side, clock: f64, yards: i32, touchdown: bool) -> PlayEvent {
        PlayEvent::new(PlayKind::Run, side, clock)
            .with_name("Back")
            .with_yards(yards)
            .with_touchdown(touchdown)
    }

    fn extra_point(side: Side, clock: f64, made: bool) -> PlayEvent {
        PlayEvent::new(PlayKind::ExtraPoint, side, clock)
            .with_name("Kicker")
            .with_made(made)
    }

    fn texts(logger: &EventLogger) -> Vec<String> {
        logger
            .get_play_by_play(meta())
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| entry.text().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = NarrationConfig::default()
            .with_play_by_play(true)
            .with_num_periods(0);

        let err = EventLogger::new(config).unwrap_err();
        assert!(matches!(
            err,
            NarrationError::Config(crate::ConfigError::InvalidPeriods(0))
        ));
    }

    #[test]
    fn test_new_accepts_valid_config() {
        let logger = EventLogger::new(NarrationConfig::default().with_num_periods(2)).unwrap();
        assert_eq!(logger.config().num_periods, 2);
        assert!(!logger.is_active());
    }

    #[test]
    fn test_play_by_play_starts_with_init() {
        let mut logger = narrating();
        logger.log_event(&run(Side::Home, 12.5, 4, false)).unwrap();

        let play_by_play = logger.get_play_by_play(meta()).unwrap();
        assert_eq!(play_by_play.len(), 2);
        assert!(play_by_play[0].is_init());
        assert_eq!(play_by_play.iter().filter(|e| e.is_init()).count(), 1);
    }

    #[test]
    fn test_inactive_logger_has_no_play_by_play() {
        let mut logger = EventLogger::with_defaults();
        assert!(!logger.is_active());
        assert!(logger.get_play_by_play(meta()).is_none());

        logger.log_event(&run(Side::Home, 12.5, 4, false)).unwrap();
        logger.log_stat(Side::Home, "Back", "rus", 1);
        assert!(logger.get_play_by_play(meta()).is_none());
    }

    #[test]
    fn test_active_empty_game_has_init_only() {
        let logger = narrating();
        let play_by_play = logger.get_play_by_play(meta()).unwrap();
        assert_eq!(play_by_play.len(), 1);
        assert!(play_by_play[0].is_init());
    }

    #[test]
    fn test_scoring_recorded_without_narration() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&run(Side::Away, 3.0, 8, false)).unwrap();
        logger.log_event(&run(Side::Away, 2.5, 2, true)).unwrap();
        logger.log_event(&extra_point(Side::Away, 2.5, true)).unwrap();

        let summary = logger.scoring_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].text, "Back rushed for 2 yards and a touchdown!");
        assert_eq!(summary[1].text, "Kicker made the extra point");
        assert_eq!(logger.score(), [0, 7]);
    }

    #[test]
    fn test_missed_kicks_are_not_scoring() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&extra_point(Side::Home, 2.5, false)).unwrap();
        logger
            .log_event(
                &PlayEvent::new(PlayKind::FieldGoal, Side::Home, 1.0)
                    .with_name("Kicker")
                    .with_made(false)
                    .with_yards(48),
            )
            .unwrap();

        assert!(logger.scoring_summary().is_empty());
        assert_eq!(logger.score(), [0, 0]);
    }

    #[test]
    fn test_safety_scores_for_other_side() {
        let mut logger = EventLogger::with_defaults();
        let sack = PlayEvent::new(PlayKind::Sack, Side::Home, 6.0)
            .with_names(["Passer", "End"])
            .with_yards(-8)
            .with_safety(true);
        logger.log_event(&sack).unwrap();

        assert_eq!(logger.score(), [0, 2]);
        assert_eq!(logger.scoring_summary()[0].side, Side::Home);
        assert!(logger.scoring_summary()[0].text.contains("safety"));
    }

    #[test]
    fn test_clock_and_quarter_stamps() {
        let mut logger = narrating();
        logger.log_event(&PlayEvent::quarter_start(1)).unwrap();
        logger.log_event(&run(Side::Home, 14.5, 3, false)).unwrap();
        logger.log_event(&PlayEvent::quarter_start(2)).unwrap();
        logger.log_event(&run(Side::Home, 9.05, 3, false)).unwrap();
        logger.log_event(&PlayEvent::overtime_start()).unwrap();
        logger.log_event(&run(Side::Home, 0.5, 3, false)).unwrap();

        let events: Vec<_> = logger
            .get_play_by_play(meta())
            .unwrap()
            .into_iter()
            .filter_map(|entry| match entry {
                PlayByPlayEntry::Text(event) => Some((event.quarter.to_string(), event.time)),
                _ => None,
            })
            .collect();

        assert_eq!(
            events,
            vec![
                ("Q1".to_string(), "15:00".to_string()),
                ("Q1".to_string(), "14:30".to_string()),
                ("Q2".to_string(), "15:00".to_string()),
                ("Q2".to_string(), "9:03".to_string()),
                ("OT".to_string(), "15:00".to_string()),
                ("OT".to_string(), "0:30".to_string()),
            ]
        );
        assert_eq!(logger.quarter(), QuarterLabel::Overtime);
    }

    #[test]
    fn test_failed_conversion_is_synthesized() {
        let mut logger = narrating();
        logger.log_event(&run(Side::Home, 4.5, 12, true)).unwrap();
        logger
            .log_event(
                &PlayEvent::new(PlayKind::PassIncomplete, Side::Home, 4.5)
                    .with_names(["Passer", "Receiver"])
                    .with_conversion_team(Side::Home),
            )
            .unwrap();
        assert_eq!(logger.conversion_state(), ConversionState::Attempting(Side::Home));

        let kickoff = PlayEvent::new(PlayKind::Kickoff, Side::Home, 4.25)
            .with_name("Kicker")
            .with_yards(-1)
            .with_touchback(true);
        logger.log_event(&kickoff).unwrap();

        let summary = logger.scoring_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[1].text, FAILED_CONVERSION_TEXT);
        assert_eq!(summary[1].side, Side::Home);
        // Stamped with the incomplete pass, not the kickoff.
        assert_eq!(summary[1].time, "4:30");
        assert_eq!(logger.score(), [6, 0]);

        let texts = texts(&logger);
        assert_eq!(texts[2], FAILED_CONVERSION_TEXT);
        assert_eq!(texts[3], "Kicker kicked off for a touchback");
        assert_eq!(logger.conversion_state(), ConversionState::Idle);
    }

    #[test]
    fn test_failed_conversion_keeps_prior_quarter() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&run(Side::Away, 0.05, 1, true)).unwrap();
        logger
            .log_event(&run(Side::Away, 0.0, 0, false).with_conversion_team(Side::Away))
            .unwrap();
        logger.log_event(&PlayEvent::quarter_start(2)).unwrap();

        let failed = &logger.scoring_summary()[1];
        assert_eq!(failed.text, FAILED_CONVERSION_TEXT);
        assert_eq!(failed.quarter, QuarterLabel::Quarter(1));
        assert_eq!(failed.time, "0:00");
    }

    #[test]
    fn test_successful_conversion() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&run(Side::Home, 8.0, 30, true)).unwrap();
        logger
            .log_event(&run(Side::Home, 8.0, 2, true).with_conversion_team(Side::Home))
            .unwrap();
        logger
            .log_event(
                &PlayEvent::new(PlayKind::Kickoff, Side::Home, 8.0)
                    .with_name("Kicker")
                    .with_yards(5)
                    .with_touchback(false),
            )
            .unwrap();

        let summary: Vec<_> = logger.scoring_summary().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            summary,
            vec![
                "Back rushed for 30 yards and a touchdown!",
                "Back rushed for a two point conversion!",
            ]
        );
        assert_eq!(logger.score(), [8, 0]);
        assert_eq!(logger.conversion_state(), ConversionState::Resolved);
    }

    #[test]
    fn test_defensive_conversion_return() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&run(Side::Home, 8.0, 30, true)).unwrap();
        let pick = PlayEvent::new(PlayKind::Interception, Side::Away, 8.0)
            .with_name("Corner")
            .with_yards(100)
            .with_touchdown(true)
            .with_conversion_team(Side::Home);
        logger.log_event(&pick).unwrap();

        let last = logger.scoring_summary().last().unwrap();
        assert_eq!(last.text, "Corner intercepted the pass and returned it for two points!");
        assert_eq!(last.side, Side::Away);
        assert_eq!(logger.score(), [6, 2]);
    }

    #[test]
    fn test_contract_violation_appends_nothing() {
        let mut logger = narrating();
        let broken = PlayEvent::new(PlayKind::Run, Side::Home, 5.0).with_name("Back");

        let err = logger.log_event(&broken).unwrap_err();
        assert!(matches!(err, NarrationError::MissingField { field: "yds", .. }));
        assert!(texts(&logger).is_empty());
        assert!(logger.scoring_summary().is_empty());
    }

    #[test]
    fn test_log_json() {
        let mut logger = narrating();
        logger
            .log_json(r#"{"type":"passComplete","t":1,"clock":6.75,"names":["Passer","End"],"yds":18,"td":false}"#)
            .unwrap();
        assert_eq!(texts(&logger), vec!["Passer completed a pass to End for 18 yards"]);
    }

    #[test]
    fn test_log_json_unknown_type() {
        let mut logger = narrating();
        let err = logger
            .log_json(r#"{"type":"onsideKick","t":0,"clock":6.75,"names":["Kicker"]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            NarrationError::Rules(play_rules::RulesError::UnknownPlayType(_))
        ));
    }

    #[test]
    fn test_stat_events() {
        let mut logger = narrating();
        logger.log_stat(Side::Away, "Back", "rusYds", 12);

        let play_by_play = logger.get_play_by_play(meta()).unwrap();
        assert!(matches!(
            &play_by_play[1],
            PlayByPlayEntry::Stat(StatEvent { amount: 12, .. })
        ));
        assert!(logger.scoring_summary().is_empty());
    }

    #[test]
    fn test_box_score_totals() {
        let mut logger = EventLogger::with_defaults();
        logger.log_event(&run(Side::Away, 2.5, 2, true)).unwrap();
        logger.log_event(&extra_point(Side::Away, 2.5, true)).unwrap();

        let box_score = logger.box_score(meta());
        assert_eq!(box_score.final_score(), [0, 7]);
        assert_eq!(box_score.teams[1].info.abbrev, "OWL");
        assert!(box_score.play_by_play.is_none());
        assert_eq!(box_score.scoring_summary.len(), 2);
    }
}
