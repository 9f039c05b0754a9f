use std::process::ExitCode;

use crate::error::Error;

/// First exit code used for validation failures.
pub const FAILURE_CODE_BASE: u8 = 10;

/// Error counts above this value share the highest failure code.
pub const MAX_COUNTED_ERRORS: usize = 100;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): no document failed
/// - `Error` (2): configuration, argument or I/O error, missing reference file
/// - `SyntaxError` (3): a reference file could not be parsed
/// - `Failure(n)` (10 + n, n capped at 100): `n` errors across all reports,
///   counting warnings too in fatal mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure(usize),
    Error,
    SyntaxError,
}

impl ExitStatus {
    /// Status of a finished check run with `errors` fatal-adjusted errors.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure(errors)
        }
    }

    /// Status for a command that failed with `err`.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let syntax = err
            .chain()
            .any(|cause| cause.downcast_ref::<Error>().is_some_and(Error::is_syntax));
        if syntax {
            ExitStatus::SyntaxError
        } else {
            ExitStatus::Error
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error => 2,
            ExitStatus::SyntaxError => 3,
            ExitStatus::Failure(errors) => {
                // Capped count is at most 100, so the sum fits in a u8.
                FAILURE_CODE_BASE + (*errors).min(MAX_COUNTED_ERRORS) as u8
            }
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
