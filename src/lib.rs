//! Elementary cellular automaton viewer (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_automata::{core,input,term,types}`.

pub use tui_automata_core as core;
pub use tui_automata_input as input;
pub use tui_automata_term as term;
pub use tui_automata_types as types;
