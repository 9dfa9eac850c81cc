//! End-to-end extraction for one input/output file pair.
//!
//! 1. Load the source bytes.
//! 2. Obtain the syntax structure from the provider.
//! 3. Walk the tree, keep calls to the target function, and append one entry per
//!    call. A failing entry is recorded and the next one is still attempted.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::core::buffer::SourceBuffer;
use crate::core::data::FunctionCall;
use crate::core::extract::{ExtractOptions, extract_calls, matching_calls};
use crate::core::parsers::{StructureError, StructureProvider};
use crate::core::writer::{EntryError, WriteMode, prepare_output, write_entry};
use crate::issues::{
    Issue, IssueLocation, KeyNotLiteralIssue, Severity, ValueNotLiteralIssue, WriteFailedIssue,
};

pub const DEFAULT_TARGET_FUNCTION: &str = "NSLocalizedString";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Name of the function whose calls become entries.
    pub target_function: String,
    pub extract: ExtractOptions,
    pub write_mode: WriteMode,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            target_function: DEFAULT_TARGET_FUNCTION.to_string(),
            extract: ExtractOptions::default(),
            write_mode: WriteMode::default(),
        }
    }
}

/// Errors that stop the run before or while writing.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No data found in file: {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Received invalid structure for {}", .path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: StructureError,
    },

    #[error(transparent)]
    Output(EntryError),
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Call expressions found anywhere in the tree.
    pub calls_found: usize,
    /// Calls to the target function.
    pub calls_matched: usize,
    pub entries_written: usize,
    pub issues: Vec<Issue>,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == severity)
            .count()
    }
}

pub fn run(
    input: &Path,
    output: &Path,
    provider: &dyn StructureProvider,
    options: &PipelineOptions,
) -> Result<RunReport, PipelineError> {
    let source = SourceBuffer::from_file(input).map_err(|source| PipelineError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let structure_error = |source| PipelineError::Structure {
        path: input.to_path_buf(),
        source,
    };
    let root = provider.structure(input).map_err(structure_error)?;
    let substructure = root
        .substructure()
        .ok_or(StructureError::MissingSubstructure)
        .map_err(structure_error)?;

    let extraction = extract_calls(substructure, &source, &options.extract);
    let mut report = RunReport {
        calls_found: extraction.calls.len(),
        issues: extraction.issues,
        ..Default::default()
    };

    let calls = matching_calls(extraction.calls, &options.target_function);
    report.calls_matched = calls.len();

    prepare_output(output, options.write_mode).map_err(PipelineError::Output)?;

    for call in &calls {
        match write_entry(call, output) {
            Ok(entry) => {
                report.entries_written += 1;
                if !entry.value_is_literal() {
                    let offset = call.parameter("value").map(|p| p.offset).or(call.offset);
                    report
                        .issues
                        .push(Issue::ValueNotLiteral(ValueNotLiteralIssue {
                            location: IssueLocation::in_source(&source, offset),
                            call: call.to_string(),
                            value: entry.value,
                        }));
                }
            }
            Err(err) if err.is_fatal() => return Err(PipelineError::Output(err)),
            Err(err) => report.issues.push(entry_issue(&source, call, err)),
        }
    }

    Ok(report)
}

fn entry_issue(source: &SourceBuffer, call: &FunctionCall, err: EntryError) -> Issue {
    match err {
        EntryError::KeyNotLiteral { key } => {
            let offset = call.parameter("").map(|p| p.offset).or(call.offset);
            Issue::KeyNotLiteral(KeyNotLiteralIssue {
                location: IssueLocation::in_source(source, offset),
                call: call.to_string(),
                key,
            })
        }
        err => Issue::WriteFailed(WriteFailedIssue {
            location: IssueLocation::in_source(source, call.offset),
            call: call.to_string(),
            error: format!("{}: {}", err, error_cause(&err)),
        }),
    }
}

fn error_cause(err: &EntryError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_default()
}
