//! Structured logging to a file. stdout is taken by the terminal UI, so
//! nothing is ever written there.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LogError;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

/// Install the global subscriber, appending to the configured log file.
pub fn init(config: &LoggingConfig) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|source| LogError::Open {
            path: config.file.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    tracing::info!(file = %config.file.display(), "logging initialised");
    Ok(())
}
