mod commands;
pub mod logging;

pub use commands::run;
pub use logging::init_global_subscriber;

use clap::Parser;
use std::path::PathBuf;

/// TheAtlasEngine custom commands for Conan
///
/// Examples:
///   atlas setup
///   atlas update
///   atlas build <path> <arguments>
///   atlas create <path> <arguments>
#[derive(Parser)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
pub struct Args {
    #[arg(short = 'C', value_name = "DIR", global = true, verbatim_doc_comment, value_parser = validate_path)]

    /// Change the current working directory
    ///
    /// If specified, changes the current working directory to the given
    /// path before executing any commands. Recipe paths and any relative
    /// paths forwarded to conan are resolved from there.
    working_directory: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    command: commands::Commands,
}

#[derive(Parser, Clone, Copy, Debug)]
#[command(next_help_heading = "Log Options")]
pub struct LogArgs {
    /// Set the level of verbosity
    ///
    /// This flag can be used multiple times to increase verbosity:
    ///   -v    for DEBUG level
    ///   -vv   for TRACE level
    ///
    /// If not specified, defaults to INFO level.
    ///
    /// Alternatively, set the `RUST_LOG` environment variable
    /// (e.g., `RUST_LOG=debug`), which takes precedence over this flag.
    ///
    /// Note: This flag is silently ignored when `--quiet` is also set.
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity",
        verbatim_doc_comment
    )]
    verbosity: u8,

    /// Suppress all output except errors
    ///
    /// This flag overrides any verbosity settings and sets the log
    /// level to ERROR. It takes precedence over both the `--verbosity`
    /// flag and the `RUST_LOG` environment variable.
    ///
    /// Output of the conan process itself is not affected.
    #[arg(short, long, global = true, verbatim_doc_comment)]
    quiet: bool,
}

fn validate_path(path: &str) -> Result<PathBuf, std::io::Error> {
    std::fs::canonicalize(path)
}
