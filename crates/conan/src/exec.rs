//! Building and running host tool command lines.
use crate::Error;

use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

/// A fully built command line for the host tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    capture: bool,
    timeout: Option<Duration>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            capture: false,
            timeout: None,
        }
    }

    /// Capture stdout instead of passing it through to the terminal.
    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Kill the child if it runs longer than `limit`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_captured(&self) -> bool {
        self.capture
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Turn a finished run into an error unless it exited successfully.
    pub fn check(&self, output: Output) -> Result<Output, Error> {
        match output.code {
            Some(0) => Ok(output),
            Some(code) => Err(Error::Failed {
                command: self.to_string(),
                code,
            }),
            None => Err(Error::Terminated {
                command: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .program
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_else(|| self.program.to_string_lossy());
        write!(f, "{name}")?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// The result of a child process that ran to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    /// `None` when the process was ended by a signal.
    pub code: Option<i32>,
    /// Empty unless the invocation was [`captured`](Invocation::captured).
    pub stdout: String,
}

impl Output {
    pub fn success(stdout: impl Into<String>) -> Self {
        Output {
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    pub fn failure(code: i32) -> Self {
        Output {
            code: Some(code),
            stdout: String::new(),
        }
    }
}

/// Runs invocations on behalf of a [`Conan`](crate::Conan) client.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is reported through [`Output::code`], not as an error;
    /// errors are reserved for failing to run the process at all.
    async fn run(&self, invocation: &Invocation) -> Result<Output, Error>;
}

/// Spawns real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct System;

impl Executor for System {
    async fn run(&self, invocation: &Invocation) -> Result<Output, Error> {
        use tokio::process::Command;

        tracing::debug!(command = %invocation, "Executing");

        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args())
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if invocation.is_captured() {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let child = cmd.spawn()?;
        let wait = child.wait_with_output();

        let output = match invocation.timeout() {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| Error::TimedOut {
                    command: invocation.to_string(),
                    limit,
                })??,
            None => wait.await?,
        };

        Ok(Output {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
