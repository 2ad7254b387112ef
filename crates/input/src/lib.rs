//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ViewAction`]s for the
//! interactive viewer. Quitting is handled separately through [`should_quit`]
//! so every front-end agrees on the exit keys.

pub mod map;

pub use tui_automata_types as types;

pub use map::{handle_key_event, should_quit};
