//! Tracing subscriber setup for the binary.

use std::io::{self, IsTerminal};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur during logging initialization.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install a global subscriber writing to stderr.
///
/// Logs go to stderr so they never mix with command output on stdout.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(config.color && io::stderr().is_terminal())
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .without_time()
                .with_writer(io::stderr);
            registry.with(layer).try_init()?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_span_events(FmtSpan::NONE)
                .with_writer(io::stderr);
            registry.with(layer).try_init()?;
        }
    }

    Ok(())
}
