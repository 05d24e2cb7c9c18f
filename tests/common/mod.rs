//! Common test utilities and fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use tempfile::TempDir;
use versioner::{CommandRunner, ShellError, VersionStore};

/// Name of the version file inside each test directory.
pub const VERSION_FILE: &str = "version.json";

/// A version store in its own temporary directory.
pub struct TestStore {
    pub dir: TempDir,
    pub store: VersionStore,
}

impl TestStore {
    /// Store over a file that does not exist yet.
    pub fn new() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let store = VersionStore::open(dir.path().join(VERSION_FILE))?;
        Ok(Self { dir, store })
    }

    /// Store over a file with the given contents.
    pub fn with_contents(contents: &str) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(VERSION_FILE);
        std::fs::write(&path, contents)?;
        let store = VersionStore::open(&path)?;
        Ok(Self { dir, store })
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    /// Raw file contents.
    pub fn contents(&self) -> anyhow::Result<String> {
        Ok(std::fs::read_to_string(self.store.path())?)
    }
}

/// Records commands instead of running them. Fails any command containing
/// `fail_on`, if set.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
    pub fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn failing_on(pattern: &str) -> Self {
        Self {
            commands: RefCell::default(),
            fail_on: Some(pattern.to_string()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<String, ShellError> {
        self.commands.borrow_mut().push(command.to_string());

        match &self.fail_on {
            Some(pattern) if command.contains(pattern.as_str()) => Err(ShellError::Spawn {
                command: command.to_string(),
                source: std::io::Error::other("simulated failure"),
            }),
            _ => Ok(String::new()),
        }
    }
}
