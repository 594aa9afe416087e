use anyhow::Result;

use super::{
    args::Command,
    commands::CommandResult,
    commands::{apply::apply, init::init, merge::merge},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was (or would be) changed
/// - `Err` if the command fails (missing file, malformed JSON, bad config, ...)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Apply(cmd) => apply(cmd),
        Command::Merge(cmd) => merge(cmd),
        Command::Init => init(),
    }
}
