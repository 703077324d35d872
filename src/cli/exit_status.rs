use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, translations file is up to date or was rewritten
/// - `Failure` (1): Command completed but the translations file is out of date
/// - `Error` (2): Command failed (config error, parse error, unreadable translations file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found differences.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
