use super::update;
use crate::cli::logging::{self, LogValue};

use conan::{Conan, Executor, Platform, Remote, RemoteStatus};
use config::Config;

/// Register the Atlas remotes, make sure a default profile exists, then
/// install the profiles for this platform.
pub(super) async fn run<E: Executor>(
    conan: &Conan<E>,
    config: &Config,
    platform: &Platform,
) -> Result<(), conan::Error> {
    tracing::info!("Setting up TheAtlasEngine environment");
    tracing::debug!(remotes = %config.remotes().as_json());

    for entry in config.remotes() {
        let remote = Remote::new(&entry.name, &entry.url);
        match conan.ensure_remote(&remote).await {
            Ok(RemoteStatus::Present) => {
                tracing::info!(remote = %remote.name, "Remote already exists")
            }
            Ok(RemoteStatus::Added) => {
                tracing::info!(remote = %remote.name, url = %remote.url, "Remote added")
            }
            Err(e) => {
                tracing::error!(remote = %remote.name, "Failed to configure remote");
                return Err(logging::log_error(e));
            }
        }
    }
    tracing::info!("Conan remotes are configured");

    default_profile(conan).await?;

    update::refresh(conan, config, platform, None).await?;

    tracing::info!("TheAtlasEngine development environment setup is complete");
    Ok(())
}

async fn default_profile<E: Executor>(conan: &Conan<E>) -> Result<(), conan::Error> {
    if let Some(path) = conan.default_profile().await? {
        tracing::info!(path = %path.display(), "Default host profile found, proceeding");
        return Ok(());
    }

    tracing::info!("Default host profile was not found, generating one now");
    conan.detect_profile().await.map_err(logging::log_error)?;

    match conan.default_profile().await? {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(contents) => tracing::info!(
                path = %path.display(),
                "Default profile generated:\n{}",
                contents.trim_end()
            ),
            Err(e) => tracing::warn!(path = %path.display(), "Could not read generated profile: {e}"),
        },
        None => tracing::warn!("conan reported success but still has no default profile"),
    }
    Ok(())
}
