use std::process::ExitCode;

/// Exit status of the glyphrange binary.
///
/// - `Success` (0): Table printed (files that failed to parse are only warned about)
/// - `Failure` (1): Usage error, e.g. no directory given
/// - `Error` (2): Command failed (missing directory, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Table printed.
    Success,
    /// Usage error.
    Failure,
    /// Command failed due to an I/O or configuration error.
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
