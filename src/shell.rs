//! Running external commands.
//!
//! The git side effect of `set --git` goes through [`CommandRunner`] so it can
//! be swapped for a recording fake in tests.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::logging::{error, info};

/// Errors from running a shell command.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Something that can run a command line and return its standard output.
pub trait CommandRunner {
    /// Run `command` to completion.
    ///
    /// A non-zero exit is an error carrying the command's standard error.
    fn run(&self, command: &str) -> Result<String, ShellError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<String, ShellError> {
        (**self).run(command)
    }
}

/// Runs commands through the platform shell (`sh -c`, or `cmd /C` on Windows).
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    current_dir: Option<PathBuf>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands in `dir` instead of the process working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String, ShellError> {
        let mut cmd = shell(command);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        info!(command, "running shell command");
        let output = cmd.output().map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(command, status = %output.status, stderr = %stderr, "shell command failed");
            return Err(ShellError::Failed {
                command: command.to_string(),
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
