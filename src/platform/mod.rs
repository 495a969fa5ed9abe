//! Process re-execution for scheduled restarts
//!
//! A restart replaces the running image with a fresh copy of the same
//! executable and argument vector. Nothing from the old instance survives.

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestartError {
    #[error("Failed to locate current executable: {0}")]
    CurrentExe(std::io::Error),
    #[error("Argument contains an interior NUL byte: {0:?}")]
    InvalidArgument(OsString),
    #[error("Failed to re-execute {path}: {message}")]
    Exec { path: PathBuf, message: String },
    #[error("Unsupported platform")]
    UnsupportedPlatform,
}

/// What a restart would execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartCommand {
    pub program: PathBuf,
    /// Full argument vector, including `argv[0]`
    pub args: Vec<OsString>,
}

impl RestartCommand {
    /// The current executable with the arguments this process was started with
    pub fn current() -> Result<Self, RestartError> {
        let program = std::env::current_exe().map_err(RestartError::CurrentExe)?;
        Ok(Self {
            program,
            args: std::env::args_os().collect(),
        })
    }
}

/// Replace this process with a fresh instance
///
/// Only returns if the restart could not be performed.
pub fn restart_process() -> Result<std::convert::Infallible, RestartError> {
    let command = RestartCommand::current()?;

    #[cfg(unix)]
    {
        unix::exec(&command)
    }

    #[cfg(windows)]
    {
        windows::respawn(&command)
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = command;
        Err(RestartError::UnsupportedPlatform)
    }
}
