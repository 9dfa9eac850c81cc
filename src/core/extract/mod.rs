//! Call extraction from the syntax structure.
//!
//! The walker visits the tree depth-first, turns every call-expression node into a
//! `FunctionCall` with its parameters resolved against the source buffer, and the
//! filter keeps the calls to the target function.

pub mod filter;
pub mod parameters;
pub mod walker;


pub use filter::matching_calls;
pub use parameters::extract_parameters;
pub use walker::{CallExtraction, extract_calls};

use crate::core::syntax::kinds;

/// Node kinds and traversal switches used while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// `key.kind` of call-expression nodes.
    pub call_kind: String,
    /// `key.kind` of parameter nodes inside a call's substructure.
    pub parameter_kind: String,
    /// Also look for calls nested inside a call's arguments.
    pub descend_into_calls: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            call_kind: kinds::CALL_EXPR.to_string(),
            parameter_kind: kinds::PARAMETER_DECL.to_string(),
            descend_into_calls: false,
        }
    }
}
