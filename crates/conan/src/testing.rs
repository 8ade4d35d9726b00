//! An in-memory stand-in for the host tool.
use crate::exec::{Executor, Invocation, Output};
use crate::remote::Remote;
use crate::Error;

use std::cell::RefCell;
use std::path::PathBuf;

/// Answers the handful of host commands this crate issues and records every call.
///
/// Remotes and the default profile persist across calls, the way the host
/// tool's home directory does.
#[derive(Debug)]
pub struct FakeHost {
    home: PathBuf,
    remotes: RefCell<Vec<Remote>>,
    calls: RefCell<Vec<Vec<String>>>,
    failing: Option<(String, i32)>,
}

impl FakeHost {
    /// A host with no remotes and no default profile, storing profiles under `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        FakeHost {
            home: home.into(),
            remotes: RefCell::default(),
            calls: RefCell::default(),
            failing: None,
        }
    }

    /// Make every invocation of `verb` exit with `code`.
    pub fn failing(mut self, verb: &str, code: i32) -> Self {
        self.failing = Some((verb.to_owned(), code));
        self
    }

    pub fn with_remote(self, remote: Remote) -> Self {
        self.remotes.borrow_mut().push(remote);
        self
    }

    pub fn remotes(&self) -> Vec<Remote> {
        self.remotes.borrow().clone()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Calls whose leading arguments equal `prefix`.
    pub fn calls_to(&self, prefix: &[&str]) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b))
            .cloned()
            .collect()
    }

    pub fn default_profile_path(&self) -> PathBuf {
        self.home.join("profiles").join("default")
    }
}

impl Executor for FakeHost {
    async fn run(&self, invocation: &Invocation) -> Result<Output, Error> {
        let args = invocation.args().to_vec();
        self.calls.borrow_mut().push(args.clone());

        if let Some((verb, code)) = &self.failing {
            if args.first() == Some(verb) {
                return Ok(Output::failure(*code));
            }
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["remote", "list", ..] => {
                let json = serde_json::to_string(&*self.remotes.borrow())?;
                Ok(Output::success(json))
            }
            ["remote", "add", name, url, ..] => {
                let mut remotes = self.remotes.borrow_mut();
                if remotes.iter().any(|r| r.name == *name) {
                    return Ok(Output::failure(1));
                }
                remotes.push(Remote::new(*name, *url));
                Ok(Output::success(""))
            }
            ["profile", "path", "default"] => {
                let path = self.default_profile_path();
                if path.exists() {
                    Ok(Output::success(format!("{}\n", path.display())))
                } else {
                    Ok(Output::failure(1))
                }
            }
            ["profile", "detect", ..] => {
                let path = self.default_profile_path();
                if let Some(dir) = path.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                std::fs::write(&path, "[settings]\narch=x86_64\nbuild_type=Release\nos=Linux\n")?;
                Ok(Output::success(""))
            }
            _ => Ok(Output::success("")),
        }
    }
}
