use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with output to `path`.
///
/// Logging is only enabled on request: stdout is the rendering surface, so
/// log lines always go to a file. The level comes from `RUST_LOG` and
/// defaults to `info`.
pub fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}
