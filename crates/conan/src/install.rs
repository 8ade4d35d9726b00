//! `config install` requests for refreshing the platform profiles.
use crate::platform::Platform;

/// Installs the profile folder for one platform out of a configuration repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigInstall {
    pub url: String,
    pub source: String,
    pub target: String,
    pub tag: Option<String>,
}

impl ConfigInstall {
    pub fn for_platform(platform: &Platform, url: impl Into<String>) -> Self {
        ConfigInstall {
            url: url.into(),
            source: platform.profile_source(),
            target: "profiles".into(),
            tag: None,
        }
    }

    /// Check out a specific release of the configuration repository.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "config".into(),
            "install".into(),
            "-sf".into(),
            self.source.clone(),
            "-tf".into(),
            self.target.clone(),
        ];
        if let Some(tag) = &self.tag {
            args.push(format!("--args=--branch {tag}"));
        }
        args.push(self.url.clone());
        args
    }
}
