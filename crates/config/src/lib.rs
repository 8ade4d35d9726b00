use etcetera::BaseStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment, Metadata, Provider,
};

#[cfg(test)]
mod tests;

lazy_static::lazy_static! {
    /// Provide a lazily instantiated static reference to
    /// a config object parsed from canonical locations
    /// so that applications have immutable access to it from
    /// anywhere without ever having to parse the config more
    /// than once.
    pub static ref CONFIG: Config = load_config();
}

fn load_config() -> Config {
    Config::figment().extract().unwrap_or_default()
}

/// A named package remote registered with the host package manager.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
}

/// Overrides for the detected host platform.
///
/// Either value, when present, replaces what the running system reports.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformOverride {
    pub os: Option<String>,
    pub arch: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    conan: String,
    remotes: Vec<RemoteEntry>,
    config_url: String,
    update_timeout: u64,
    #[serde(default)]
    platform: PlatformOverride,
}

impl Config {
    /// The executable used to reach the host package manager.
    pub fn conan(&self) -> &str {
        &self.conan
    }

    /// Remotes ensured by `setup`, in registration order.
    pub fn remotes(&self) -> &[RemoteEntry] {
        &self.remotes
    }

    /// Repository the platform profiles are installed from.
    pub fn config_url(&self) -> &str {
        &self.config_url
    }

    pub fn update_timeout(&self) -> Duration {
        Duration::from_secs(self.update_timeout)
    }

    pub fn platform(&self) -> &PlatformOverride {
        &self.platform
    }

    pub fn with_platform(mut self, platform: PlatformOverride) -> Self {
        self.platform = platform;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conan: "conan".into(),
            remotes: vec![
                RemoteEntry {
                    name: "engine3d-conan".into(),
                    url: "https://libhal.jfrog.io/artifactory/api/conan/engine3d-conan".into(),
                },
                RemoteEntry {
                    name: "libhal-trunk".into(),
                    url: "https://libhal.jfrog.io/artifactory/api/conan/trunk-conan".into(),
                },
            ],
            config_url: "https://github.com/engine3d-dev/conan-config.git".into(),
            update_timeout: 60,
            platform: PlatformOverride::default(),
        }
    }
}

impl Config {
    pub fn from<T: Provider>(provider: T) -> Result<Config, figment::Error> {
        Figment::from(provider).extract()
    }

    /// The canonical location of the user's config file, if one can be determined.
    pub fn user_file() -> Option<PathBuf> {
        etcetera::choose_base_strategy()
            .ok()
            .map(|c| c.config_dir().join("atlas.toml"))
    }

    pub fn figment() -> Figment {
        Config::layered(Config::user_file())
    }

    /// Defaults, then the given TOML file, then `ATLAS_` prefixed environment.
    ///
    /// Lists are replaced, not appended, so a configured `remotes` table
    /// stands on its own.
    pub fn layered(file: Option<PathBuf>) -> Figment {
        let mut fig = Figment::from(Config::default());

        if let Some(config) = file {
            fig = fig.merge(Toml::file(config));
        }

        fig.merge(Env::prefixed("ATLAS_").split("__"))
    }
}

impl Provider for Config {
    fn metadata(&self) -> figment::Metadata {
        Metadata::named("Atlas CLI Config")
    }
    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        figment::providers::Serialized::defaults(self).data()
    }
}
