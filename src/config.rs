//! Runtime configuration.
//!
//! There is no configuration file. The binary builds a [`Config`] from its
//! flags and environment and passes it down; library users construct one
//! directly or skip it and open a [`VersionStore`] themselves.

use std::path::PathBuf;

use crate::store::{StoreError, VersionStore};

/// Version file used when none is given, relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "version.json";

/// Environment variable overriding the version file path.
pub const VERSION_FILE_ENV: &str = "VERSIONER_FILE";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "VERSIONER_LOG";

/// Settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the version file.
    pub version_file: PathBuf,
    /// Log settings for the binary's subscriber.
    pub logging: LoggingConfig,
}

impl Config {
    pub fn new(version_file: impl Into<PathBuf>) -> Self {
        Self {
            version_file: version_file.into(),
            logging: LoggingConfig::default(),
        }
    }

    /// Open the configured version file, creating it if needed.
    pub fn open_store(&self) -> Result<VersionStore, StoreError> {
        VersionStore::open(&self.version_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

/// Log settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `versioner=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Use ANSI colours when stderr is a terminal.
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
            color: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}
