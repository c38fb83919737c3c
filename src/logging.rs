//! Debug logging sinks.
//!
//! Compositing emits `tracing` events (placement at `debug`, per-row splices at `trace`).
//! Nothing is printed unless [`init`] installs a subscriber, which only happens when
//! `MODAL_OVERLAY_DEBUG=1`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

/// Filter used when `MODAL_OVERLAY_LOG` is unset.
pub const DEFAULT_FILTER: &str = "modal_overlay=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to open log file {path}: {source}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Builds the event filter from configuration.
pub fn env_filter(config: &EnvConfig) -> Result<EnvFilter, LoggingError> {
    let filter = config.log_filter.as_deref().unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
        filter: filter.to_string(),
        source,
    })
}

/// Installs the global subscriber when debugging is enabled.
///
/// Returns `Ok(false)` when debugging is off. Events go to the configured log file (appended)
/// or to stderr.
pub fn init(config: &EnvConfig) -> Result<bool, LoggingError> {
    if !config.debug {
        return Ok(false);
    }

    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    let installed = match config.write_log.as_deref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenLog {
                    path: PathBuf::from(path),
                    source,
                })?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|_| LoggingError::AlreadyInstalled)?;
    Ok(true)
}
