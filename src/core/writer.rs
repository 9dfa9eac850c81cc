//! `.strings` resource file output.
//!
//! Each matched call becomes one entry:
//!
//! ```text
//! /* comment */
//! "key" = "value";
//!
//! ```
//!
//! Entries are appended one at a time: the file is opened, written and closed for
//! every entry, so a failure on one entry leaves earlier entries in place.

use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::FunctionCall;
use crate::utils::{is_quoted, trim_quotes};

/// Comment written when the call has no (or an empty) `comment:` argument.
pub const NO_COMMENT: &str = "No comment provided by engineer.";

/// How the output file is treated at the start of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Keep existing content. Running twice duplicates entries.
    #[default]
    Append,
    /// Empty the file once before the first entry is written.
    Truncate,
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Output file not found, and unable to create file: {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to get handle to output file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key is not a string literal: {key}")]
    KeyNotLiteral { key: String },

    #[error("Unable to append entry to output file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EntryError {
    /// Whether the whole run must stop, rather than just this entry.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EntryError::Create { .. })
    }
}

/// One key/value/comment entry of a `.strings` file.
///
/// `key` and `value` keep their surrounding quotes; `comment` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub comment: String,
    pub key: String,
    pub value: String,
}

impl ResourceEntry {
    /// Build the entry for a localized string call.
    ///
    /// The key is the positional argument and must be a string literal. The value
    /// falls back to the key when there is no `value:` argument.
    pub fn from_call(call: &FunctionCall) -> Result<Self, EntryError> {
        let comment = call
            .parameter_body("comment")
            .map(trim_quotes)
            .unwrap_or_default();
        let comment = if comment.is_empty() {
            NO_COMMENT
        } else {
            comment
        };

        let key = call.parameter_body("").unwrap_or_default();
        if !is_quoted(key) {
            return Err(EntryError::KeyNotLiteral {
                key: key.to_string(),
            });
        }

        let value = call.parameter_body("value").unwrap_or(key);

        Ok(Self {
            comment: comment.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn value_is_literal(&self) -> bool {
        is_quoted(&self.value)
    }
}

impl fmt::Display for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/* {} */\n{} = {};\n\n",
            self.comment, self.key, self.value
        )
    }
}

/// Apply the write mode before any entry is written.
pub fn prepare_output(path: &Path, mode: WriteMode) -> Result<(), EntryError> {
    match mode {
        WriteMode::Append => Ok(()),
        WriteMode::Truncate => File::create(path)
            .map(drop)
            .map_err(|source| EntryError::Create {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Append the entry for `call` to the file at `path`, creating the file if needed.
///
/// The file is created before the call is validated, so an invalid first entry
/// still leaves an empty output file behind.
pub fn write_entry(call: &FunctionCall, path: &Path) -> Result<ResourceEntry, EntryError> {
    ensure_exists(path)?;

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| EntryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let entry = ResourceEntry::from_call(call)?;

    file.write_all(entry.to_string().as_bytes())
        .map_err(|source| EntryError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(entry)
}

fn ensure_exists(path: &Path) -> Result<(), EntryError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(EntryError::Create {
            path: path.to_path_buf(),
            source,
        }),
    }
}
