//! On-disk JSON format of the version file.
//!
//! The file holds a single object, `{"version":"1.2.3"}`. Unknown fields are
//! ignored on read and never written.

use serde::Serialize;
use serde_json::Value;

use crate::version::Version;

use super::error::CorruptReason;

/// The JSON record stored in the version file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    pub version: String,
}

impl VersionRecord {
    pub fn new(version: &Version) -> Self {
        Self {
            version: version.to_string(),
        }
    }

    /// Encode as compact JSON.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode the raw file contents.
    ///
    /// Only an object with a string `version` field is accepted; arrays and
    /// other JSON values are corrupt even if they hold a version string.
    pub fn decode(bytes: &[u8]) -> Result<Self, CorruptReason> {
        let text = std::str::from_utf8(bytes).map_err(|_| CorruptReason::NotUtf8)?;

        let Value::Object(mut fields) = serde_json::from_str::<Value>(text)? else {
            return Err(CorruptReason::NotAnObject);
        };

        match fields.remove("version") {
            Some(Value::String(version)) => Ok(Self { version }),
            _ => Err(CorruptReason::MissingVersion),
        }
    }

    /// Parse the stored version string.
    ///
    /// Parse failures are reported as corruption, not as the underlying
    /// [`VersionError`](crate::VersionError).
    pub fn to_version(&self) -> Result<Version, CorruptReason> {
        Version::parse(&self.version)
            .map_err(|_| CorruptReason::InvalidVersion(self.version.clone()))
    }
}
