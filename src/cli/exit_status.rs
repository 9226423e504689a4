use std::process::ExitCode;

use crate::issues::Issue;

/// Process exit status of a check.
///
/// - `Success` (0): every language defines the same tables and keys
/// - `Failure` (1): discrepancies were found and reported
/// - `Error` (2): the check could not run (I/O, parse, config or usage error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn for_issues(issues: &[Issue]) -> Self {
        if issues.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
