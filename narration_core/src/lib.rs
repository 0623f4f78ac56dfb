//! # Narration Core
//!
//! Turns a simulated football game into play-by-play text and a
//! score-accurate scoring summary, and condenses that summary into
//! box-score rows.
//!
//! ## Core Components
//!
//! - **event_logger**: The producer. One call per simulated play; tracks the
//!   quarter and pending two point conversions
//! - **box_score**: The serializable document that carries the logs to the
//!   presentation layer
//! - **scoring_summary**: The consumer. Classifies scoring entries by their
//!   text, merges kicks and conversions into the preceding score, and groups
//!   rows by quarter
//!
//! ## Design Philosophy
//!
//! - **One logger per game**: No state is shared between games
//! - **Scoring is never optional**: The scoring summary is recorded even when
//!   the play-by-play is not
//! - **Text is the contract**: The summary is rebuilt from rendered text so it
//!   stays correct for previously serialized box scores

pub mod box_score;
mod config;
mod error;
pub mod event_logger;
pub mod scoring_summary;

pub use box_score::*;
pub use config::*;
pub use error::*;
pub use event_logger::*;
pub use scoring_summary::*;
