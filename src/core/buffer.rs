//! Raw source bytes addressed by byte offset.
//!
//! SourceKit reports every position as a byte offset/length pair into the original
//! file. `SourceBuffer` resolves those spans with bounds-checked slicing and explicit
//! UTF-8 validation, and maps offsets back to line/column for diagnostics.

use std::{fs, io, path::Path, str::Utf8Error};

use thiserror::Error;

use crate::core::data::{SourceContext, SourceLocation};

/// Why a span could not be resolved to text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("span has a negative offset or length ({offset}, {length})")]
    Negative { offset: i64, length: i64 },

    #[error("span {start}..{end} is out of bounds for a {len}-byte buffer")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        start: usize,
        end: usize,
        #[source]
        source: Utf8Error,
    },
}

/// The original source file, kept as raw bytes.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    file_path: String,
    bytes: Vec<u8>,
    /// Byte offsets where each line starts.
    line_index: Vec<usize>,
}

impl SourceBuffer {
    pub fn new(file_path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let line_index = build_line_index(&bytes);
        Self {
            file_path: file_path.into(),
            bytes,
            line_index,
        }
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(path.to_string_lossy(), bytes))
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolve the text in `[offset, offset + length)`.
    ///
    /// Offsets are signed because SourceKit encodes them as 64-bit integers.
    pub fn span(&self, offset: i64, length: i64) -> Result<&str, LookupError> {
        let (Ok(start), Ok(length)) = (usize::try_from(offset), usize::try_from(length)) else {
            return Err(LookupError::Negative { offset, length });
        };
        let end = start.saturating_add(length);
        let bytes = self
            .bytes
            .get(start..end)
            .ok_or(LookupError::OutOfBounds {
                start,
                end,
                len: self.bytes.len(),
            })?;
        std::str::from_utf8(bytes).map_err(|source| LookupError::InvalidUtf8 { start, end, source })
    }

    /// Source context (1-based line and column plus the line text) for a byte offset.
    ///
    /// Offsets past the end clamp to the end of the buffer.
    pub fn context_at(&self, offset: usize) -> SourceContext {
        let offset = offset.min(self.bytes.len());
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line - 1];
        let col = String::from_utf8_lossy(&self.bytes[line_start..offset])
            .chars()
            .count()
            + 1;

        let line_end = self.bytes[line_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |pos| line_start + pos);
        let source_line = String::from_utf8_lossy(&self.bytes[line_start..line_end])
            .trim_end_matches('\r')
            .to_string();

        SourceContext::new(
            SourceLocation::new(self.file_path.clone(), line, col),
            source_line,
        )
    }
}

fn build_line_index(bytes: &[u8]) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Returns the 1-based line containing `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
