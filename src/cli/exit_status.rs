use std::process::ExitCode;

use crate::core::pipeline::PipelineError;

/// Exit status of a `genstrings` run.
///
/// - `Success` (0): all matched calls were written, warnings allowed
/// - `EntryErrors` (1): at least one entry was skipped
/// - `Usage` (2): bad command-line arguments
/// - `InputUnreadable` (3): the Swift source could not be read
/// - `StructureInvalid` (4): the syntax structure was unavailable or malformed
/// - `OutputUncreatable` (5): the output file could not be created
/// - `Error` (6): configuration or other internal error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    EntryErrors,
    Usage,
    InputUnreadable,
    StructureInvalid,
    OutputUncreatable,
    Error,
}

impl ExitStatus {
    /// Map a fatal error to its exit status.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<PipelineError>() {
            Some(PipelineError::ReadInput { .. }) => ExitStatus::InputUnreadable,
            Some(PipelineError::Structure { .. }) => ExitStatus::StructureInvalid,
            Some(PipelineError::Output(_)) => ExitStatus::OutputUncreatable,
            None => ExitStatus::Error,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::EntryErrors => ExitCode::from(1),
            ExitStatus::Usage => ExitCode::from(2),
            ExitStatus::InputUnreadable => ExitCode::from(3),
            ExitStatus::StructureInvalid => ExitCode::from(4),
            ExitStatus::OutputUncreatable => ExitCode::from(5),
            ExitStatus::Error => ExitCode::from(6),
        }
    }
}
