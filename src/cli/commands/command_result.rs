use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::merge::MergeOutcome;

/// How a merging command treats the target files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Merge and write every target.
    Write,
    /// Report pending changes, write nothing.
    DryRun,
    /// Like `DryRun`, but pending changes make the command fail.
    Check,
}

impl WriteMode {
    pub fn from_flags(dry_run: bool, check: bool) -> Self {
        if check {
            WriteMode::Check
        } else if dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        }
    }

    pub fn writes(self) -> bool {
        self == WriteMode::Write
    }
}

#[derive(Debug)]
pub enum CommandSummary {
    Apply(MergeSummary),
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MergeSummary {
    pub mode: WriteMode,
    /// One entry per target file, in the order they were processed.
    pub outcomes: Vec<MergeOutcome>,
}

impl MergeSummary {
    /// Number of keys that were (or would be) added or updated.
    pub fn changed_key_count(&self) -> usize {
        self.outcomes.iter().map(MergeOutcome::changed_count).sum()
    }

    /// Number of files with at least one added or updated key.
    pub fn changed_file_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_up_to_date()).count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    /// The configuration file that was written.
    pub config_path: PathBuf,
}

/// Result of running locmerge commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Apply(summary) | CommandSummary::Merge(summary)
                if summary.mode == WriteMode::Check && summary.changed_file_count() > 0 =>
            {
                ExitStatus::OutOfDate
            }
            _ => ExitStatus::Success,
        }
    }
}
