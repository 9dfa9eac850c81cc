//! Extraction engine.
//!
//! - `parsers`: obtain the SourceKit syntax structure for an input file
//! - `syntax`: the structure as a tree of `SyntaxNode`s
//! - `buffer`: byte-offset access to the source text
//! - `extract`: walk the tree and collect calls with their parameters
//! - `writer`: render and append `.strings` entries
//! - `pipeline`: tie the steps together for one input/output pair

pub mod buffer;
pub mod data;
pub mod extract;
pub mod parsers;
pub mod pipeline;
pub mod syntax;
pub mod writer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use buffer::{LookupError, SourceBuffer};
pub use data::{FunctionCall, Parameter, SourceContext, SourceLocation};
pub use pipeline::{PipelineError, PipelineOptions, RunReport, run};
pub use syntax::SyntaxNode;
pub use writer::{EntryError, ResourceEntry, WriteMode};
