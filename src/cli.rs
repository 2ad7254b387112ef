//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tui_automata::core::{Overrides, RuleSelection};
use tui_automata::types::DEFAULT_PAUSE_MS;

/// Render Wolfram's elementary cellular automata in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tui-automata", version, about)]
pub struct Args {
    /// Rule to render (0-255), or "all" to cycle through every rule.
    #[arg(short, long, default_value = "all", value_name = "RULE")]
    pub rule: RuleSelection,

    /// Number of generations to render [default: terminal height minus the banner].
    #[arg(long, allow_negative_numbers = true, value_name = "N")]
    pub rows: Option<i64>,

    /// Visible row width; even values are rounded down to odd [default: terminal width].
    #[arg(short, long, allow_negative_numbers = true, value_name = "N")]
    pub width: Option<i64>,

    /// Pause between rules when cycling, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PAUSE_MS, value_name = "MS")]
    pub pause_ms: u64,

    /// Colored full-screen viewer with key navigation.
    #[arg(short, long)]
    pub interactive: bool,

    /// Write logs to PATH (default tui-automata.log). Filter with RUST_LOG.
    #[arg(
        long,
        env = "TUI_AUTOMATA_LOG",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "tui-automata.log"
    )]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            rule: self.rule,
            rows: self.rows,
            width: self.width,
            interactive: self.interactive,
        }
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
