use anyhow::Result;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeSummary, WriteMode};
use crate::merge::{preview_json, read_object, update_json};

/// Merge the top-level keys of `cmd.data` into `cmd.target`.
pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let data = read_object(&cmd.data)?;
    let mode = WriteMode::from_flags(cmd.dry_run, false);

    let outcome = if mode.writes() {
        update_json(&cmd.target, &data)?
    } else {
        preview_json(&cmd.target, &data)?
    };

    Ok(CommandResult {
        summary: CommandSummary::Merge(MergeSummary {
            mode,
            outcomes: vec![outcome],
        }),
    })
}
