//! Elementary cellular automaton viewer (default binary).
//!
//! Plain mode prints each rule as text rows of `' '` and `'#'`. Interactive
//! mode (`--interactive`) uses crossterm and a framebuffer-based renderer
//! (no ratatui widgets/layout).

mod cli;
mod interactive;
mod logging;
mod plain;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use tui_automata::core::{SimConfig, TerminalSize};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        logging::init_tracing(path)?;
    }

    let terminal = crossterm::terminal::size()
        .ok()
        .map(|(w, h)| TerminalSize::new(w, h));
    if terminal.is_none() {
        warn!("terminal size unavailable");
    }

    let config = SimConfig::resolve(args.overrides(), terminal)?.with_pause(args.pause());
    info!(
        selection = ?config.selection,
        generations = config.geometry.generations(),
        width = config.geometry.display_width(),
        pause_ms = args.pause_ms,
        interactive = args.interactive,
        "configuration resolved"
    );
    if config.width_adjusted {
        warn!(
            width = config.geometry.display_width(),
            "width rounded down to an odd number of cells"
        );
    }

    if args.interactive {
        interactive::run(config)
    } else {
        plain::run(config, io::stdout().lock(), std::thread::sleep)
    }
}
