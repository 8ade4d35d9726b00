//! # Host Errors
//!
//! The error type for failures while driving the host package manager.
use std::time::Duration;
use thiserror::Error;

/// The error representing a failure to run, or a failure reported by, the host tool.
#[derive(Error, Debug)]
pub enum Error {
    /// The host executable could not be located.
    #[error("`{program}` could not be found on PATH")]
    NotFound {
        /// The executable name that was searched for.
        program: String,
        /// The lookup failure.
        #[source]
        source: which::Error,
    },
    /// The command ran to completion but reported failure.
    #[error("`{command}` failed with exit code {code}")]
    Failed {
        /// The rendered command line.
        command: String,
        /// The exit code of the child process.
        code: i32,
    },
    /// The child process was ended by a signal before reporting an exit code.
    #[error("`{command}` was terminated before it could exit")]
    Terminated {
        /// The rendered command line.
        command: String,
    },
    /// The command did not complete within its time limit.
    #[error("`{command}` did not finish within {}s", .limit.as_secs())]
    TimedOut {
        /// The rendered command line.
        command: String,
        /// The limit that was exceeded.
        limit: Duration,
    },
    /// A transparent wrapper for a [`std::io::Error`]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A transparent wrapper for a [`serde_json::Error`]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The exit code reported by the host tool, if it got far enough to report one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::Failed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
