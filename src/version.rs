//! Semantic version values.
//!
//! A [`Version`] is a plain `major.minor.patch` triple. Bumping produces a new
//! value; the setters exist only to correct a single component in place.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Searched for anywhere in the input, so `release-1.2.3` and `1.2.3beta`
/// both yield 1.2.3. The suffix group only captures text that starts with
/// `-`, `_` or `.`.
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a literal; failing to compile it is a bug, not a runtime error.
    #[allow(clippy::expect_used)]
    Regex::new(r"v?(\d+)\.(\d+)\.(\d+)([-_.].+)?").expect("Failed to compile semver pattern")
});

/// Errors produced while building or parsing a [`Version`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A single component is non-numeric, negative, or out of range.
    #[error("'{input}' is not a valid version component: {reason}")]
    InvalidComponent { input: String, reason: &'static str },

    /// A full version string does not have three numeric components.
    #[error("'{input}' does not appear to be a valid SemVer version")]
    InvalidSemVer { input: String },
}

impl VersionError {
    fn component(input: impl fmt::Display, reason: &'static str) -> Self {
        Self::InvalidComponent {
            input: input.to_string(),
            reason,
        }
    }
}

/// Unchecked input for a single version component.
///
/// Unsigned integers are always valid. Signed integers are rejected when
/// negative, strings when they are not a plain (optionally signed) integer.
pub trait IntoComponent {
    fn into_component(self) -> Result<u64, VersionError>;
}

macro_rules! unsigned_component {
    ($($ty:ty),*) => {$(
        impl IntoComponent for $ty {
            fn into_component(self) -> Result<u64, VersionError> {
                u64::try_from(self).map_err(|_| VersionError::component(self, "number is too large"))
            }
        }
    )*};
}

macro_rules! signed_component {
    ($($ty:ty),*) => {$(
        impl IntoComponent for $ty {
            fn into_component(self) -> Result<u64, VersionError> {
                u64::try_from(self)
                    .map_err(|_| VersionError::component(self, "negative numbers are not permitted"))
            }
        }
    )*};
}

unsigned_component!(u8, u16, u32, u64, usize);
signed_component!(i8, i16, i32, i64, isize);

impl IntoComponent for &str {
    fn into_component(self) -> Result<u64, VersionError> {
        parse_component(self)
    }
}

impl IntoComponent for String {
    fn into_component(self) -> Result<u64, VersionError> {
        parse_component(&self)
    }
}

impl IntoComponent for &String {
    fn into_component(self) -> Result<u64, VersionError> {
        parse_component(self)
    }
}

fn parse_component(input: &str) -> Result<u64, VersionError> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::component(input, "not a valid number"));
    }

    // "-0" is still zero
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(VersionError::component(input, "negative numbers are not permitted"));
    }

    digits
        .parse()
        .map_err(|_| VersionError::component(input, "number is too large"))
}

/// A `major.minor.patch` semantic version.
///
/// # Example
///
/// ```
/// use versioner::Version;
///
/// let v: Version = "v1.2.3-beta.1".parse()?;
/// assert_eq!(v, Version::new(1, 2, 3));
///
/// // The suffix is not kept
/// assert_eq!(v.to_string(), "1.2.3");
///
/// assert_eq!(v.next_minor()?.to_string(), "1.3.0");
/// # Ok::<(), versioner::VersionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Version used when none is given (0.1.0).
    pub const INITIAL: Self = Self::new(0, 1, 0);

    /// Build a version from unchecked components, validating each one.
    pub fn try_new(
        major: impl IntoComponent,
        minor: impl IntoComponent,
        patch: impl IntoComponent,
    ) -> Result<Self, VersionError> {
        Ok(Self {
            major: major.into_component()?,
            minor: minor.into_component()?,
            patch: patch.into_component()?,
        })
    }

    /// Parse a version string, discarding any pre-release/build suffix.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        s.parse()
    }

    /// Parse a version string and also return the trailing suffix, separator
    /// included (`"-beta.1"` for `"1.2.3-beta.1"`).
    ///
    /// The suffix is never part of the [`Version`] itself and is lost when
    /// the version is formatted again.
    pub fn parse_with_suffix(s: &str) -> Result<(Self, Option<String>), VersionError> {
        let invalid = || VersionError::InvalidSemVer { input: s.to_string() };

        let caps = SEMVER_PATTERN.captures(s).ok_or_else(invalid)?;
        let (Some(major), Some(minor), Some(patch)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return Err(invalid());
        };

        let version = Self::try_new(major.as_str(), minor.as_str(), patch.as_str())?;
        let suffix = caps.get(4).map(|m| m.as_str().to_string());

        Ok((version, suffix))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Overwrite the major component. Not used for bumping.
    pub fn set_major(&mut self, major: impl IntoComponent) -> Result<(), VersionError> {
        self.major = major.into_component()?;
        Ok(())
    }

    /// Overwrite the minor component. Not used for bumping.
    pub fn set_minor(&mut self, minor: impl IntoComponent) -> Result<(), VersionError> {
        self.minor = minor.into_component()?;
        Ok(())
    }

    /// Overwrite the patch component. Not used for bumping.
    pub fn set_patch(&mut self, patch: impl IntoComponent) -> Result<(), VersionError> {
        self.patch = patch.into_component()?;
        Ok(())
    }

    /// `x.y.z` -> `x.y.(z+1)`
    pub fn next_patch(&self) -> Result<Self, VersionError> {
        Ok(Self::new(self.major, self.minor, increment(self.patch)?))
    }

    /// `x.y.z` -> `x.(y+1).0`
    pub fn next_minor(&self) -> Result<Self, VersionError> {
        Ok(Self::new(self.major, increment(self.minor)?, 0))
    }

    /// `x.y.z` -> `(x+1).0.0`
    pub fn next_major(&self) -> Result<Self, VersionError> {
        Ok(Self::new(increment(self.major)?, 0, 0))
    }
}

fn increment(component: u64) -> Result<u64, VersionError> {
    component
        .checked_add(1)
        .ok_or_else(|| VersionError::component(component, "cannot be incremented further"))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_suffix(s).map(|(version, _)| version)
    }
}
