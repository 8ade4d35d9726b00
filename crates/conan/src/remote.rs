use serde::{Deserialize, Serialize};

/// A package remote as reported by `conan remote list --format=json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    pub name: String,
    pub url: String,
    #[serde(default = "enabled", skip_serializing)]
    pub verify_ssl: bool,
    #[serde(default = "enabled", skip_serializing)]
    pub enabled: bool,
}

fn enabled() -> bool {
    true
}

impl Remote {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Remote {
            name: name.into(),
            url: url.into(),
            verify_ssl: true,
            enabled: true,
        }
    }
}

/// What [`Conan::ensure_remote`](crate::Conan::ensure_remote) found or did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteStatus {
    Present,
    Added,
}

pub(crate) fn parse_list(json: &str) -> Result<Vec<Remote>, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json)
}
