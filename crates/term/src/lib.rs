//! Terminal rendering for the automaton viewer.
//!
//! Two renderers implement the core's `RowSink` capability:
//!
//! - [`TextRenderer`] writes plain glyph rows (`' '` / `'#'`) to any `io::Write`
//! - [`FrameSink`] paints colored rows into a [`FrameBuffer`] through an
//!   [`AutomatonView`]; [`TerminalRenderer`] then flushes the framebuffer to the
//!   terminal, emitting only changed runs after the first frame
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep views pure so layouts can be unit-tested without a terminal

pub mod automaton_view;
pub mod fb;
pub mod renderer;
pub mod text;

pub use tui_automata_core as core;
pub use tui_automata_types as types;

pub use automaton_view::{AutomatonView, FrameSink, Palette, Progress, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{glyph, rule_label, TextRenderer};
