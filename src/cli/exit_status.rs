use std::process::ExitCode;

/// Process exit status of a locmerge run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every target was merged, or already holds the bundle content.
    Success,
    /// `--check` found locale files that a merge would change.
    OutOfDate,
    /// A file could not be read, parsed or written, or the configuration is invalid.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::OutOfDate => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
