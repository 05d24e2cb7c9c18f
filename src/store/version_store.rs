//! File-backed version store.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::logging::{debug, info, warn};
use crate::version::Version;

use super::error::{CorruptReason, StoreError};
use super::format::VersionRecord;

/// A version store backed by a single JSON file.
///
/// Nothing is cached: every read goes back to disk and every write replaces
/// the whole file. There is no locking, so two processes writing at the same
/// time race and the last writer wins.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    /// Open the version file at `path`, creating an empty one if it does not
    /// exist yet.
    ///
    /// The path is canonicalized and checked for read and write access up
    /// front, so later operations only fail on I/O or content problems.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let requested = path.as_ref();

        let path = match requested.canonicalize() {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %requested.display(), "creating empty version file");
                create_empty(requested)?
            }
            Err(source) => {
                return Err(StoreError::Unreadable {
                    path: requested.to_path_buf(),
                    source,
                });
            }
        };

        File::open(&path).map_err(|source| StoreError::Unreadable {
            path: path.clone(),
            source,
        })?;

        OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|source| StoreError::Unwritable {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "opened version file");
        Ok(Self { path })
    }

    /// The canonical path of the version file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the version file has no content at all, meaning no
    /// version has been set yet. A file with any content, even whitespace,
    /// is not empty.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read_bytes()?.is_empty())
    }

    /// Read and parse the stored version.
    ///
    /// Malformed JSON, a missing `version` field and an unparsable version
    /// string are all reported as [`StoreError::Corrupt`]. An empty file is
    /// corrupt too; check [`is_empty`](Self::is_empty) first.
    pub fn read(&self) -> Result<Version, StoreError> {
        let bytes = self.read_bytes()?;

        let version = VersionRecord::decode(&bytes)
            .and_then(|record| record.to_version())
            .map_err(|reason| self.corrupt(reason))?;

        debug!(path = %self.path.display(), %version, "read version");
        Ok(version)
    }

    /// Replace the file contents with `version`.
    pub fn write(&self, version: &Version) -> Result<Version, StoreError> {
        let encoded = VersionRecord::new(version)
            .encode()
            .map_err(|e| self.write_failed(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut file = File::create(&self.path).map_err(|e| self.write_failed(e))?;
        file.write_all(encoded.as_bytes())
            .map_err(|e| self.write_failed(e))?;
        file.sync_all().map_err(|e| self.write_failed(e))?;

        info!(path = %self.path.display(), %version, "wrote version");
        Ok(*version)
    }

    /// Parse `version` and write it.
    ///
    /// Parse failures surface as [`StoreError::Version`] and leave the file
    /// untouched. A pre-release/build suffix is accepted but not stored.
    pub fn write_str(&self, version: &str) -> Result<Version, StoreError> {
        let (parsed, suffix) = Version::parse_with_suffix(version)?;

        if suffix.is_some() {
            warn!(input = version, suffix = ?suffix, "dropping version suffix");
        }

        self.write(&parsed)
    }

    fn read_bytes(&self) -> Result<Vec<u8>, StoreError> {
        fs::read(&self.path).map_err(|source| StoreError::Unreadable {
            path: self.path.clone(),
            source,
        })
    }

    fn corrupt(&self, reason: CorruptReason) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }

    fn write_failed(&self, source: io::Error) -> StoreError {
        StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

/// Create an empty file at `path` and return its canonical form.
///
/// A path that cannot be created is reported as unreadable, since nothing
/// can be read from it afterwards.
fn create_empty(path: &Path) -> Result<PathBuf, StoreError> {
    let unreadable = |source| StoreError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(unreadable)?;

    path.canonicalize().map_err(unreadable)
}
