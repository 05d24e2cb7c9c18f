//! Unified error type for the versioner library.
//!
//! Each module has its own error enum; [`Error`] wraps them so callers that
//! run a whole command can use one type.

use thiserror::Error;

use crate::shell::ShellError;
use crate::store::StoreError;
use crate::version::VersionError;

/// Unified error type for all versioner operations.
///
/// # Example
///
/// ```
/// use versioner::Version;
///
/// fn parse(s: &str) -> versioner::Result<Version> {
///     Ok(s.parse()?)
/// }
///
/// assert!(parse("1.2").unwrap_err().is_version());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid version component or version string.
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Problem with the version file.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A git command failed.
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if a version string or component was rejected, whether
    /// directly or while handing it to the store.
    pub fn is_version(&self) -> bool {
        matches!(self, Self::Version(_) | Self::Store(StoreError::Version(_)))
    }

    /// Returns `true` if this is a version file error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns `true` if the version file content is corrupt.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_corrupt())
    }

    /// Returns `true` if this is a shell command error.
    pub fn is_shell(&self) -> bool {
        matches!(self, Self::Shell(_))
    }
}
