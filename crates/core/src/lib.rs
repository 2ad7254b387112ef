//! Automaton core - pure, deterministic, and testable
//!
//! This crate contains the elementary cellular automaton engine. It performs
//! **no I/O** and has no dependency on terminals or input handling:
//!
//! - **Deterministic**: the same rule, geometry and seed always produce the same rows
//! - **Testable**: every operation is a pure function or a small state machine
//! - **Portable**: renderers plug in through the [`RowSink`] trait
//!
//! # Module Structure
//!
//! - [`rule`]: Wolfram codes as 8-entry lookup tables over 3-cell neighborhoods
//! - [`engine`]: seed sizing, seed construction and the row transition step
//! - [`window`]: centered display slice of a context-padded row
//! - [`driver`]: the generation loop and the [`RowSink`] rendering capability
//! - [`config`]: startup configuration resolved from overrides and terminal size
//! - [`error`]: the [`AutomatonError`] type
//!
//! # Example
//!
//! ```
//! use tui_automata_core::{Driver, Geometry, Rule, RowSink, AutomatonError};
//!
//! struct Lines(Vec<String>);
//!
//! impl RowSink for Lines {
//!     type Error = AutomatonError;
//!
//!     fn draw_row(&mut self, _generation: usize, cells: &[u8]) -> Result<(), AutomatonError> {
//!         self.0.push(cells.iter().map(|&c| if c == 1 { '#' } else { ' ' }).collect());
//!         Ok(())
//!     }
//! }
//!
//! let mut lines = Lines(Vec::new());
//! Driver::new(Rule::new(30), Geometry::new(4, 5)?).run(&mut lines)?;
//! assert_eq!(lines.0, ["  #  ", " ### ", "##  #", "# ###"]);
//! # Ok::<(), AutomatonError>(())
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod rule;
pub mod window;

pub use tui_automata_types as types;

// Re-export commonly used types for convenience
pub use config::{Overrides, RuleSelection, SimConfig, TerminalSize};
pub use driver::{Driver, Geometry, Phase, RowSink};
pub use engine::{size_info, Row, SizeInfo};
pub use error::AutomatonError;
pub use rule::{pack_neighborhood, Rule};
pub use window::display_bounds;
