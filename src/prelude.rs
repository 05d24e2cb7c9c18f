//! Convenient re-exports for common usage patterns.
//!
//! ```no_run
//! use versioner::prelude::*;
//!
//! let store = VersionStore::open("version.json")?;
//! commands::set(&store, "1.0.0", Some(&ShellRunner::new()), |v| println!("set {v}"))?;
//! # Ok::<(), versioner::Error>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Version values
pub use crate::version::{IntoComponent, Version, VersionError};

// Version file
pub use crate::store::{CorruptReason, StoreError, VersionStore};

// Commands
pub use crate::commands::{self, Bump, BumpOutcome, CurrentVersion};

// External commands
pub use crate::shell::{CommandRunner, ShellError, ShellRunner};

pub use crate::config::{Config, LogFormat, LoggingConfig};
