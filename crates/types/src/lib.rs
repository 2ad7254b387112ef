//! Shared types module - constants and small data structures
//!
//! This module defines the values shared between the automaton core, the
//! terminal renderers and the input layer. Everything here is plain data with
//! no external dependencies, so it can be used from any context.
//!
//! # Automaton Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RULE_COUNT` | 256 | Number of elementary rules (Wolfram codes 0-255) |
//! | `NEIGHBORHOOD_COUNT` | 8 | Distinct 3-cell neighborhoods |
//! | `NEIGHBORHOOD_MASK` | 7 | Mask applied to a packed neighborhood |
//!
//! # Layout Constants
//!
//! Each rule run is preceded by a five-line banner (blank, rule, title, rule,
//! blank). The default generation count is derived from the terminal height
//! minus that banner, and one more line when a single rule is shown (so the
//! shell prompt does not scroll the top of the pattern away) or when the
//! interactive viewer draws its footer.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LABEL_ROWS` | 5 | Rows taken by the rule banner |
//! | `MIN_TERMINAL_HEIGHT` | 6 | Smallest usable terminal height |
//! | `DEFAULT_PAUSE_MS` | 1000 | Pause between rules when cycling |
//! | `MAX_GENERATIONS` | 65535 | Largest accepted generation count |
//! | `MAX_DISPLAY_WIDTH` | 65535 | Largest accepted row width |
//!
//! # Examples
//!
//! ```
//! use tui_automata_types::{ViewAction, RULE_COUNT};
//!
//! assert_eq!(RULE_COUNT, 256);
//!
//! let action = ViewAction::from_str("nextRule").unwrap();
//! assert_eq!(action, ViewAction::NextRule);
//! assert_eq!(action.as_str(), "nextRule");
//! ```

/// Number of elementary rules.
pub const RULE_COUNT: u16 = 256;

/// Number of distinct 3-cell neighborhoods (000-111).
pub const NEIGHBORHOOD_COUNT: u8 = 8;

/// Mask for a packed 3-bit neighborhood.
pub const NEIGHBORHOOD_MASK: u8 = 0b111;

/// Rows taken by the rule banner printed before each run.
pub const LABEL_ROWS: u16 = 5;

/// Smallest terminal height from which default row counts can be derived.
pub const MIN_TERMINAL_HEIGHT: u16 = 6;

/// Extra row kept free below a run: the shell prompt after a single rule, or
/// the footer of the interactive viewer.
pub const PROMPT_ROWS: u16 = 1;

/// Largest generation count accepted from the command line.
///
/// The seed row grows by two cells per generation, so an unbounded count
/// would ask for an allocation the process cannot satisfy.
pub const MAX_GENERATIONS: u16 = u16::MAX;

/// Largest visible row width accepted from the command line.
pub const MAX_DISPLAY_WIDTH: u16 = u16::MAX;

/// Default pause between rules when cycling through all of them (1 second).
pub const DEFAULT_PAUSE_MS: u64 = 1000;

/// Poll interval of the interactive event loop.
pub const TICK_MS: u64 = 16;

/// Glyph for a dead cell in plain-text output.
pub const DEAD_GLYPH: char = ' ';

/// Glyph for a live cell in plain-text output.
pub const LIVE_GLYPH: char = '#';

/// A single automaton cell: `0` (dead) or `1` (live).
pub type Bit = u8;

/// Viewer actions produced by key input in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Show the next rule (wraps 255 -> 0)
    NextRule,
    /// Show the previous rule (wraps 0 -> 255)
    PrevRule,
    /// Run the current rule again from its seed
    Replay,
    /// Toggle automatic advance when cycling through all rules
    Pause,
}

impl ViewAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_automata_types::ViewAction;
    ///
    /// assert_eq!(ViewAction::from_str("prevRule"), Some(ViewAction::PrevRule));
    /// assert_eq!(ViewAction::from_str("REPLAY"), Some(ViewAction::Replay));
    /// assert_eq!(ViewAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nextrule" => Some(ViewAction::NextRule),
            "prevrule" => Some(ViewAction::PrevRule),
            "replay" => Some(ViewAction::Replay),
            "pause" => Some(ViewAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::NextRule => "nextRule",
            ViewAction::PrevRule => "prevRule",
            ViewAction::Replay => "replay",
            ViewAction::Pause => "pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults() {
        assert_eq!(LABEL_ROWS, 5);
        assert_eq!(MIN_TERMINAL_HEIGHT, LABEL_ROWS + PROMPT_ROWS);
        assert_eq!(DEFAULT_PAUSE_MS, 1000);
        // One output bit per neighborhood => 2^8 rules.
        assert_eq!(1u16 << NEIGHBORHOOD_COUNT, RULE_COUNT);
    }

    #[test]
    fn view_action_round_trips_through_str() {
        for action in [
            ViewAction::NextRule,
            ViewAction::PrevRule,
            ViewAction::Replay,
            ViewAction::Pause,
        ] {
            assert_eq!(ViewAction::from_str(action.as_str()), Some(action));
        }
    }
}
