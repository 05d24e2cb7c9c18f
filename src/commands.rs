//! The `current`, `set` and `bump` commands.
//!
//! These sit between an argument parser and the [`VersionStore`]; they do no
//! printing of their own.

use std::path::Path;

use crate::error::Result;
use crate::logging::info;
use crate::shell::{CommandRunner, ShellError};
use crate::store::{StoreError, VersionStore};
use crate::version::{Version, VersionError};

/// What `current` found in the version file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentVersion {
    /// The file is empty; no version has been set yet.
    Uninitialized,
    Set(Version),
}

/// Read the current version, treating an empty file as "not set yet"
/// rather than corrupt.
pub fn current(store: &VersionStore) -> std::result::Result<CurrentVersion, StoreError> {
    if store.is_empty()? {
        return Ok(CurrentVersion::Uninitialized);
    }
    store.read().map(CurrentVersion::Set)
}

/// Set the version from a string, then commit and tag it when `git` is given.
///
/// `on_written` runs once the file holds the new version and before any git
/// command, so callers can report the change even if git then fails. A git
/// failure does not roll the file back.
pub fn set(
    store: &VersionStore,
    input: &str,
    git: Option<&dyn CommandRunner>,
    on_written: impl FnOnce(&Version),
) -> Result<Version> {
    let version = store.write_str(input)?;
    on_written(&version);

    if let Some(runner) = git {
        record_in_git(runner, store.path(), &version)?;
    }

    Ok(version)
}

/// Commit the version file and tag the commit with `version`.
pub fn record_in_git(
    runner: &dyn CommandRunner,
    path: &Path,
    version: &Version,
) -> std::result::Result<(), ShellError> {
    runner.run(&commit_command(path, version))?;
    runner.run(&tag_command(version))?;
    info!(%version, "recorded version in git");
    Ok(())
}

/// `git add <path> && git commit -m 'Set app version to <version>'`
pub fn commit_command(path: &Path, version: &Version) -> String {
    format!(
        "git add {} && git commit -m 'Set app version to {}'",
        path.display(),
        version
    )
}

/// `git tag <version>`
pub fn tag_command(version: &Version) -> String {
    format!("git tag {version}")
}

/// Which component `bump` increments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl Bump {
    /// Pick the component from command-line flags: major wins over minor,
    /// minor over patch, and patch is used when no flag is set.
    pub fn from_flags(major: bool, minor: bool, patch: bool) -> Self {
        match (major, minor, patch) {
            (true, _, _) => Self::Major,
            (false, true, _) => Self::Minor,
            (false, false, _) => Self::Patch,
        }
    }

    /// The next version after `version`.
    pub fn apply(self, version: &Version) -> std::result::Result<Version, VersionError> {
        match self {
            Self::Major => version.next_major(),
            Self::Minor => version.next_minor(),
            Self::Patch => version.next_patch(),
        }
    }
}

/// The versions before and after a bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub current: Version,
}

/// Read the current version, increment it and write it back.
pub fn bump(store: &VersionStore, bump: Bump) -> std::result::Result<BumpOutcome, StoreError> {
    let previous = store.read()?;
    let current = store.write(&bump.apply(&previous)?)?;

    info!(%previous, %current, ?bump, "bumped version");
    Ok(BumpOutcome { previous, current })
}
