//! # Recipe Commands
//!
//! Command lines for the host tool's `build` and `create` verbs, along with
//! the rules for picking the build type and splitting user arguments.
use crate::platform::{Conf, Profile};

use std::fmt;

/// The host verb a recipe is dispatched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Build,
    Create,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Build => "build",
            Verb::Create => "create",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `build_type` setting passed to the host tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildType(String);

const BUILD_TYPE_SETTING: &str = "build_type=";

impl BuildType {
    /// An explicit `build_type=` among the forwarded arguments wins, then
    /// `--release`, then `Debug`.
    pub fn resolve<S: AsRef<str>>(forwarded: &[S], release: bool) -> Self {
        forwarded
            .iter()
            .map(AsRef::as_ref)
            .find(|arg| arg.contains(BUILD_TYPE_SETTING))
            .and_then(|arg| arg.rsplit('=').next())
            .map(|value| BuildType(value.to_owned()))
            .unwrap_or_else(|| {
                if release {
                    BuildType("Release".into())
                } else {
                    BuildType("Debug".into())
                }
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User arguments to a recipe subcommand after the known flags are pulled out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forwarded {
    pub path: String,
    pub release: bool,
    pub args: Vec<String>,
}

impl Forwarded {
    /// Splits raw trailing arguments.
    ///
    /// The first argument is the recipe path unless it looks like a flag, in
    /// which case the path is `.`. A `--release` anywhere is consumed, as is
    /// the first `--` separator. Everything else is kept in order.
    pub fn split<I, S>(raw: I, release: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut release = release;
        let mut separator_seen = false;
        let mut rest = Vec::new();

        for arg in raw.into_iter().map(Into::into) {
            match arg.as_str() {
                "--release" => release = true,
                "--" if !separator_seen => separator_seen = true,
                _ => rest.push(arg),
            }
        }

        let path = if rest.first().is_some_and(|first| !first.starts_with('-')) {
            rest.remove(0)
        } else {
            ".".to_owned()
        };

        Forwarded {
            path,
            release,
            args: rest,
        }
    }

    pub fn build_type(&self) -> BuildType {
        BuildType::resolve(&self.args, self.release)
    }
}

/// A complete `build` or `create` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub verb: Verb,
    pub path: String,
    pub build_type: BuildType,
    pub profile: Option<Profile>,
    pub confs: Vec<Conf>,
    pub forwarded: Vec<String>,
}

impl Recipe {
    /// `<verb> <path> -b missing -s build_type=<T> [-pr <profile>] [-c ..] [forwarded..]`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.verb.as_str().to_owned(),
            self.path.clone(),
            "-b".into(),
            "missing".into(),
            "-s".into(),
            format!("{BUILD_TYPE_SETTING}{}", self.build_type),
        ];
        if let Some(profile) = self.profile {
            args.extend(["-pr".into(), profile.name().into()]);
        }
        args.extend(self.confs.iter().flat_map(Conf::args));
        args.extend(self.forwarded.iter().cloned());
        args
    }
}
