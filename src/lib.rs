//! Keep a project's semantic version in a small JSON file.
//!
//! The version file holds `{"version":"1.2.3"}`. This library parses and
//! validates versions, reads and overwrites the file, and implements the
//! `current`, `set` and `bump` commands on top of it.
//!
//! # Quick Start
//!
//! ```no_run
//! use versioner::prelude::*;
//!
//! let store = VersionStore::open("version.json")?;
//!
//! match commands::current(&store)? {
//!     CurrentVersion::Uninitialized => {
//!         store.write_str("0.1.0")?;
//!     }
//!     CurrentVersion::Set(version) => println!("{version}"),
//! }
//!
//! let outcome = commands::bump(&store, Bump::Minor)?;
//! println!("{} -> {}", outcome.previous, outcome.current);
//! # Ok::<(), versioner::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`version`] - The [`Version`] value: parsing, formatting, increments
//! - [`store`] - The JSON version file
//! - [`commands`] - `current`, `set` and `bump`
//! - [`shell`] - Running the git commands behind `set --git`
//! - [`config`] - Runtime settings for the binary
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the `versioner` binary
//! - `full` - Enable all features

pub mod commands;
pub mod config;
mod error;
mod logging;
pub mod prelude;
pub mod shell;
pub mod store;
#[cfg(feature = "cli")]
pub mod subscriber;
pub mod version;

// Re-export the unified error type
pub use error::{Error, Result};

pub use commands::{Bump, BumpOutcome, CurrentVersion};
pub use config::Config;
pub use shell::{CommandRunner, ShellError, ShellRunner};
pub use store::{CorruptReason, StoreError, VersionStore};
pub use version::{IntoComponent, Version, VersionError};
