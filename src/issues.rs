//! Issue types for extraction results.
//!
//! Every problem that does not abort the run is recorded as an issue and handed to
//! the reporter. Each issue is self-contained with the location and text needed to
//! display it.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::buffer::{LookupError, SourceBuffer};
use crate::core::data::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    KeyNotLiteral,
    ValueNotLiteral,
    UnreadableSpan,
    WriteFailed,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::KeyNotLiteral => write!(f, "key-not-literal"),
            Rule::ValueNotLiteral => write!(f, "value-not-literal"),
            Rule::UnreadableSpan => write!(f, "unreadable-span"),
            Rule::WriteFailed => write!(f, "write-failed"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// Where an issue was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLocation {
    /// A position inside the source file, with the line for context display.
    Source(SourceContext),
    /// File-level only, when the syntax node carried no offset.
    File { path: String },
}

impl IssueLocation {
    pub fn in_source(buffer: &SourceBuffer, offset: Option<usize>) -> Self {
        match offset {
            Some(offset) => IssueLocation::Source(buffer.context_at(offset)),
            None => IssueLocation::File {
                path: buffer.file_path().to_string(),
            },
        }
    }
}

/// Which part of a parameter a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanField {
    Name,
    Body,
}

impl fmt::Display for SpanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanField::Name => write!(f, "name"),
            SpanField::Body => write!(f, "body"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// The positional argument (the key) is not a string literal. The entry is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotLiteralIssue {
    pub location: IssueLocation,
    /// The offending call, rendered as source.
    pub call: String,
    pub key: String,
}

impl KeyNotLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::KeyNotLiteral
    }
}

/// The `value` argument is not a string literal. The entry is still written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueNotLiteralIssue {
    pub location: IssueLocation,
    pub call: String,
    pub value: String,
}

impl ValueNotLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ValueNotLiteral
    }
}

/// A parameter span could not be read from the source buffer and was treated as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableSpanIssue {
    pub location: IssueLocation,
    pub field: SpanField,
    pub error: LookupError,
}

impl UnreadableSpanIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnreadableSpan
    }
}

/// The entry could not be appended to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailedIssue {
    pub location: IssueLocation,
    pub call: String,
    pub error: String,
}

impl WriteFailedIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::WriteFailed
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while extracting or writing entries.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    KeyNotLiteral(KeyNotLiteralIssue),
    ValueNotLiteral(ValueNotLiteralIssue),
    UnreadableSpan(UnreadableSpanIssue),
    WriteFailed(WriteFailedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

impl<'a> From<&'a IssueLocation> for ReportLocation<'a> {
    fn from(location: &'a IssueLocation) -> Self {
        match location {
            IssueLocation::Source(ctx) => ReportLocation::Source(ctx),
            IssueLocation::File { path } => ReportLocation::File { path },
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards it through `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for KeyNotLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        (&self.location).into()
    }

    fn message(&self) -> String {
        format!("key is not a string literal: {}", self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("entry skipped for {}", self.call))
    }
}

impl Report for ValueNotLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        (&self.location).into()
    }

    fn message(&self) -> String {
        format!("value is not a string literal: {}", self.value)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("written as-is for {}", self.call))
    }
}

impl Report for UnreadableSpanIssue {
    fn location(&self) -> ReportLocation<'_> {
        (&self.location).into()
    }

    fn message(&self) -> String {
        format!("could not read parameter {}: {}", self.field, self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("parameter {} treated as empty", self.field))
    }
}

impl Report for WriteFailedIssue {
    fn location(&self) -> ReportLocation<'_> {
        (&self.location).into()
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("entry skipped for {}", self.call))
    }
}
