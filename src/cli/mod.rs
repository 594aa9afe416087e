use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{ApplyArgs, ApplyCommand, Arguments, Command, MergeCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let command = args.command_or_default();
    let verbose = command.verbose();

    let result = run::run(command)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
