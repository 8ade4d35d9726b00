use crate::cli::logging;

use clap::Parser;
use conan::{ConfigInstall, Conan, Executor, Platform};
use config::Config;

#[derive(Parser, Debug)]
pub(in super::super) struct Args {
    /// Specific release tag of the configuration repository to install
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,
}

pub(super) async fn run<E: Executor>(
    conan: &Conan<E>,
    config: &Config,
    platform: &Platform,
    args: Args,
) -> Result<(), conan::Error> {
    refresh(conan, config, platform, args.tag).await
}

/// Install the profile folder published for `platform` into the conan home.
pub(super) async fn refresh<E: Executor>(
    conan: &Conan<E>,
    config: &Config,
    platform: &Platform,
    tag: Option<String>,
) -> Result<(), conan::Error> {
    let install = ConfigInstall::for_platform(platform, config.config_url()).with_tag(tag);
    tracing::debug!(source = %install.source, url = %install.url, tag = ?install.tag);

    match conan.config_install(&install, config.update_timeout()).await {
        Ok(()) => {
            tracing::info!("Profiles for {platform} updated successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to update configuration");
            Err(logging::log_error(e))
        }
    }
}
