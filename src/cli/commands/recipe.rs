use crate::cli::logging;

use clap::Parser;
use conan::{Conan, Executor, Forwarded, Platform, Recipe, Verb};
use std::path::Path;

#[derive(Parser, Debug)]
pub(in super::super) struct RecipeArgs {
    /// Build in Release mode
    #[arg(long)]
    release: bool,

    /// Path to the recipe folder, then arguments forwarded to conan
    ///
    /// The path defaults to the current directory. Everything after it is
    /// passed through verbatim, e.g.:
    ///   atlas build . -s build_type=RelWithDebInfo -o enable_tests_only=True
    ///
    /// An explicit `build_type=` setting takes precedence over `--release`.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        verbatim_doc_comment
    )]
    args: Vec<String>,
}

pub(super) async fn run<E: Executor>(
    conan: &Conan<E>,
    verb: Verb,
    args: RecipeArgs,
    platform: &Platform,
) -> Result<(), conan::Error> {
    let recipe = prepare(verb, args, platform);

    let resolved = std::path::absolute(Path::new(&recipe.path))
        .unwrap_or_else(|_| Path::new(&recipe.path).to_path_buf());
    let profile = recipe.profile.map(|p| p.name()).unwrap_or_default();
    match verb {
        Verb::Build => tracing::info!(
            path = %resolved.display(),
            profile,
            build_type = %recipe.build_type,
            "Building"
        ),
        Verb::Create => tracing::info!(
            path = %resolved.display(),
            profile,
            build_type = %recipe.build_type,
            "Creating package"
        ),
    }

    match conan.recipe(&recipe).await {
        Ok(()) => {
            match verb {
                Verb::Build => tracing::info!("Build completed successfully"),
                Verb::Create => tracing::info!("Creating package completed successfully"),
            }
            Ok(())
        }
        Err(e) => {
            match (verb, e.exit_code()) {
                (Verb::Build, Some(code)) => tracing::error!("Build failed with exit code {code}"),
                (Verb::Create, Some(code)) => {
                    tracing::error!("Creating package failed with exit code {code}")
                }
                _ => (),
            }
            Err(logging::log_error(e))
        }
    }
}

fn prepare(verb: Verb, args: RecipeArgs, platform: &Platform) -> Recipe {
    let forwarded = Forwarded::split(args.args, args.release);
    let profile = platform.profile();
    if profile.is_none() {
        tracing::warn!(
            os = ?platform.os(),
            "No Atlas profile for this operating system, using conan's default profile"
        );
    }

    Recipe {
        verb,
        build_type: forwarded.build_type(),
        path: forwarded.path,
        profile,
        confs: platform.confs().to_vec(),
        forwarded: forwarded.args,
    }
}
