//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `apply`: Merge the built-in translation bundles into the locale files (default)
//! - `merge`: Merge the top-level keys of a JSON file into another JSON file
//! - `init`: Initialize locmerge configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Resolve the command to run. No subcommand means `apply` with default arguments.
    pub fn command_or_default(self) -> Command {
        match self.command {
            Some(command) => command,
            None => Command::Apply(ApplyCommand::default()),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ApplyArgs {
    /// Project root; config lookup starts here (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locales directory, relative to the root (overrides config file)
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Only apply the bundles for these locales
    /// Can be specified multiple times: --locale en --locale ml
    #[arg(long = "locale", value_name = "CODE")]
    pub locales: Vec<String>,

    /// Show what would change without writing any file
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with status 1 if any locale file is out of date (implies no writes)
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct ApplyCommand {
    #[command(flatten)]
    pub args: ApplyArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// JSON file to update in place
    pub target: PathBuf,

    /// JSON file whose top-level keys are merged into the target
    pub data: PathBuf,

    /// Show what would change without writing the target
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge the built-in translation bundles into the locale files
    Apply(ApplyCommand),
    /// Merge the top-level keys of one JSON file into another
    Merge(MergeCommand),
    /// Initialize a new .locmergerc.json configuration file
    Init,
}

impl Command {
    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match self {
            Command::Apply(cmd) => cmd.args.verbose,
            Command::Merge(cmd) => cmd.verbose,
            Command::Init => false,
        }
    }
}
