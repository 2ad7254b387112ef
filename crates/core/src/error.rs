//! Error types for the automaton core.

use thiserror::Error;

/// Errors raised by rule parsing, seed sizing, windowing and stepping.
///
/// Every variant except [`AutomatonError::InvalidState`] is a startup error:
/// it is detected before the first row is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A caller-supplied value is out of range or has the wrong parity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal invariant was broken (e.g. stepping a row shorter than 3 cells).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The terminal is too small to derive a default size from.
    #[error("terminal window height ({height}) must be at least {min}")]
    TerminalTooSmall { height: u16, min: u16 },

    /// A default needs the terminal size but it could not be queried.
    #[error("terminal size unavailable; pass --rows and --width explicitly")]
    TerminalUnavailable,
}

impl AutomatonError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
