//! Diagnostic logging setup
//!
//! Line-mode commands log to stderr. The TUI owns the terminal, so it only
//! logs when a log file is given.

use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'p> {
    Stderr,
    File(&'p Path),
    Disabled,
}

/// Build the filter from an explicit directive, `RUST_LOG`, or the default
///
/// # Errors
///
/// Returns an error if `directive` is not a valid filter.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(d) => Ok(EnvFilter::try_new(d)?),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened,
/// or a subscriber is already installed.
pub fn init(target: LogTarget<'_>, directive: Option<&str>) -> Result<()> {
    let filter = build_filter(directive)?;

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {e}"))
        }
    }
}
