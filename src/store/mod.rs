//! Persistence of the project version in a JSON file.
//!
//! The file holds `{"version":"<major>.<minor>.<patch>"}`. A zero-byte file is
//! the valid "no version yet" state; any other content that is not such a
//! record is corrupt.

mod error;
mod format;
mod version_store;

pub use error::{CorruptReason, StoreError};
pub use format::VersionRecord;
pub use version_store::VersionStore;
