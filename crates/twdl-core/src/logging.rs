//! Logging init: file under the XDG state dir, or stderr when that fails.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used for the log file when `RUST_LOG` is unset.
const FILE_DIRECTIVES: &str = "info,twdl=debug,twdl_core=debug";
/// Filter used on stderr when `RUST_LOG` is unset; keeps tool output readable.
const STDERR_DIRECTIVES: &str = "warn";

fn env_filter_or(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Path of the log file: `~/.local/state/twdl/twdl.log` (state dir is created).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("twdl")?;
    Ok(xdg_dirs.place_state_file("twdl.log")?)
}

/// Logs to `~/.local/state/twdl/twdl.log`.
/// Returns Err if the file cannot be opened so the caller can use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(FILE_DIRECTIVES))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("twdl logging initialized at {}", path.display());
    Ok(())
}

/// Warnings and errors to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(STDERR_DIRECTIVES))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
