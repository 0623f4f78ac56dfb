//! Errors raised while decoding play vocabulary from the wire.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),

    #[error("invalid side index {0}, expected 0 or 1")]
    InvalidSide(u8),

    #[error("invalid quarter label: {0:?}")]
    InvalidQuarterLabel(String),
}
