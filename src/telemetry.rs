//! Tracing subscriber set-up.
//!
//! Library code only emits `tracing` events. Hosts call [`init_tracing`] once
//! at start-up to decide where they go.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(String),

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Filter from `RUST_LOG` when set, otherwise from the configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string())),
    }
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails if the directive does not parse or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
