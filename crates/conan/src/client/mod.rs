#[cfg(test)]
mod tests;

use crate::exec::{Executor, Invocation, Output, System};
use crate::install::ConfigInstall;
use crate::recipe::Recipe;
use crate::remote::{self, Remote, RemoteStatus};
use crate::Error;

use std::path::PathBuf;
use std::time::Duration;

/// A handle on the host package manager's command line.
#[derive(Clone, Debug)]
pub struct Conan<E = System> {
    program: PathBuf,
    exec: E,
}

impl Conan<System> {
    /// Find `program` on `PATH` and drive it with real child processes.
    pub fn locate(program: &str) -> Result<Self, Error> {
        let path = which::which(program).map_err(|source| Error::NotFound {
            program: program.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Located host tool");
        Ok(Conan::with_executor(path, System))
    }
}

impl<E: Executor> Conan<E> {
    pub fn with_executor(program: impl Into<PathBuf>, exec: E) -> Self {
        Conan {
            program: program.into(),
            exec,
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn executor(&self) -> &E {
        &self.exec
    }

    fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(self.program.clone(), args)
    }

    async fn call(&self, invocation: Invocation) -> Result<Output, Error> {
        let output = self.exec.run(&invocation).await?;
        invocation.check(output)
    }

    /// The remotes currently registered with the host tool.
    #[tracing::instrument(skip(self), err)]
    pub async fn remotes(&self) -> Result<Vec<Remote>, Error> {
        let output = self
            .call(self.invocation(["remote", "list", "--format=json"]).captured())
            .await?;
        Ok(remote::parse_list(&output.stdout)?)
    }

    pub async fn add_remote(&self, remote: &Remote) -> Result<(), Error> {
        self.call(self.invocation([
            "remote",
            "add",
            remote.name.as_str(),
            remote.url.as_str(),
        ]))
        .await?;
        Ok(())
    }

    /// Register `remote` unless a remote of the same name already exists.
    ///
    /// An existing remote is left untouched, even if its URL differs.
    pub async fn ensure_remote(&self, remote: &Remote) -> Result<RemoteStatus, Error> {
        if self.remotes().await?.iter().any(|r| r.name == remote.name) {
            return Ok(RemoteStatus::Present);
        }
        self.add_remote(remote).await?;
        Ok(RemoteStatus::Added)
    }

    /// The path of the default host profile, or `None` if there isn't one yet.
    pub async fn default_profile(&self) -> Result<Option<PathBuf>, Error> {
        let invocation = self.invocation(["profile", "path", "default"]).captured();
        let output = self.exec.run(&invocation).await?;
        match output.code {
            Some(0) => {
                let path = output.stdout.trim();
                Ok((!path.is_empty()).then(|| PathBuf::from(path)))
            }
            _ => Ok(None),
        }
    }

    /// Generate and persist the default profile from the detected toolchain.
    pub async fn detect_profile(&self) -> Result<(), Error> {
        self.call(self.invocation(["profile", "detect"])).await?;
        Ok(())
    }

    pub async fn config_install(
        &self,
        install: &ConfigInstall,
        limit: Duration,
    ) -> Result<(), Error> {
        self.call(self.invocation(install.args()).with_timeout(limit))
            .await?;
        Ok(())
    }

    /// Run `build` or `create`, streaming the host tool's output.
    pub async fn recipe(&self, recipe: &Recipe) -> Result<(), Error> {
        let invocation = self.invocation(recipe.args());
        tracing::debug!(command = %invocation);
        self.call(invocation).await?;
        Ok(())
    }
}
