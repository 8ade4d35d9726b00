mod recipe;
mod setup;
mod update;

use super::Args;

use clap::Subcommand;
use conan::{Conan, Platform, Verb};
use config::{Config, CONFIG};

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Configure the Conan remotes and host profiles for TheAtlasEngine
    ///
    /// Safe to run repeatedly:
    ///
    /// - Registers the Atlas remotes that are not yet known to conan
    /// - Generates a default host profile if there is none
    /// - Installs the profiles published for this platform
    #[command(verbatim_doc_comment)]
    Setup,
    /// Build the project with platform-specific defaults
    Build(recipe::RecipeArgs),
    /// Create a package with platform-specific defaults
    Create(recipe::RecipeArgs),
    /// Update the Conan profiles for the host platform
    Update(update::Args),
}

/// The platform to select profiles for, after any configured overrides.
fn platform(config: &Config) -> Platform {
    let overrides = config.platform();
    if overrides.os.is_none() && overrides.arch.is_none() {
        return Platform::detect();
    }
    Platform::new(
        overrides.os.as_deref().unwrap_or(std::env::consts::OS),
        overrides.arch.as_deref().unwrap_or(std::env::consts::ARCH),
    )
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    if let Some(dir) = &args.working_directory {
        std::env::set_current_dir(dir)?;
    }

    let config: &Config = &CONFIG;
    let platform = platform(config);
    tracing::debug!(%platform, machine = platform.machine(), "Detected host platform");

    let conan = Conan::locate(config.conan())?;

    match args.command {
        Commands::Setup => setup::run(&conan, config, &platform).await?,
        Commands::Build(args) => recipe::run(&conan, Verb::Build, args, &platform).await?,
        Commands::Create(args) => recipe::run(&conan, Verb::Create, args, &platform).await?,
        Commands::Update(args) => update::run(&conan, config, &platform, args).await?,
    }
    Ok(())
}
