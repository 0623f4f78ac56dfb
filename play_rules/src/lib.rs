//! # Play Rules
//!
//! The shared vocabulary between the play simulation engine and the narration
//! core: team sides, play events as reported by the simulator, the game clock
//! and quarter labels, and the point values of each way to score.
//!
//! This crate holds no narration logic. It only describes what happened on
//! the field.

mod error;
pub mod game_clock;
pub mod mechanics;
pub mod plays;
pub mod teams;

pub use error::*;
pub use game_clock::*;
pub use mechanics::*;
pub use plays::*;
pub use teams::*;
