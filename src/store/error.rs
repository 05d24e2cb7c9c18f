//! Error types for the version store.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::VersionError;

/// Errors that can occur while opening, reading or writing the version file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Version file at {} does not appear to be readable: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version file at {} does not appear to be writable: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version file at {} appears to be corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: CorruptReason },

    #[error("Failed to write to the version file at {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version handed to the store could not be parsed.
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Why a version file was rejected as corrupt.
#[derive(Error, Debug)]
pub enum CorruptReason {
    /// Not JSON at all.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but not an object.
    #[error("expected a JSON object")]
    NotAnObject,

    /// An object without a string `version` field.
    #[error("missing a string \"version\" field")]
    MissingVersion,

    /// The contents are not UTF-8 text.
    #[error("contents are not valid UTF-8")]
    NotUtf8,

    /// The `version` field holds something that is not a version.
    #[error("it contains an invalid version number '{0}'")]
    InvalidVersion(String),
}

impl StoreError {
    /// Returns `true` if the file held something other than a valid record.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }

    /// The file path involved, if the error concerns the file itself.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Unreadable { path, .. }
            | Self::Unwritable { path, .. }
            | Self::Corrupt { path, .. }
            | Self::WriteFailed { path, .. } => Some(path.as_path()),
            Self::Version(_) => None,
        }
    }
}
