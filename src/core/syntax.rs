//! SourceKit syntax structure.
//!
//! SourceKit describes a file as nested dictionaries keyed by `key.*` names, with
//! children under `key.substructure`. `SyntaxNode` models that shape as an explicit
//! tagged union so traversal can match on it exhaustively.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// SourceKit dictionary keys.
pub mod keys {
    pub const KIND: &str = "key.kind";
    pub const NAME: &str = "key.name";
    pub const OFFSET: &str = "key.offset";
    pub const LENGTH: &str = "key.length";
    pub const NAME_OFFSET: &str = "key.nameoffset";
    pub const NAME_LENGTH: &str = "key.namelength";
    pub const BODY_OFFSET: &str = "key.bodyoffset";
    pub const BODY_LENGTH: &str = "key.bodylength";
    pub const SUBSTRUCTURE: &str = "key.substructure";
}

/// SourceKit node kinds the extractor cares about.
pub mod kinds {
    pub const CALL_EXPR: &str = "source.lang.swift.expr.call";
    pub const PARAMETER_DECL: &str = "source.lang.swift.decl.var.parameter";
}

/// A scalar value in the structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    String(String),
    Integer(i64),
    Boolean(bool),
}

/// A node of the syntax structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyntaxNode {
    /// Ordered children, e.g. the value of `key.substructure`.
    Sequence(Vec<SyntaxNode>),
    /// A dictionary of `key.*` fields.
    Object(BTreeMap<String, SyntaxNode>),
    Leaf(Leaf),
}

impl SyntaxNode {
    pub fn field(&self, key: &str) -> Option<&SyntaxNode> {
        match self {
            SyntaxNode::Object(fields) => fields.get(key),
            SyntaxNode::Sequence(_) | SyntaxNode::Leaf(_) => None,
        }
    }

    /// String value of a field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self.field(key) {
            Some(SyntaxNode::Leaf(Leaf::String(s))) => Some(s),
            _ => None,
        }
    }

    /// Integer value of a field, if present and an integer.
    pub fn int_field(&self, key: &str) -> Option<i64> {
        match self.field(key) {
            Some(SyntaxNode::Leaf(Leaf::Integer(n))) => Some(*n),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.str_field(keys::KIND)
    }

    pub fn substructure(&self) -> Option<&SyntaxNode> {
        self.field(keys::SUBSTRUCTURE)
    }

    /// Children under `key.substructure`, only when it is a sequence.
    pub fn substructure_items(&self) -> Option<&[SyntaxNode]> {
        match self.substructure() {
            Some(SyntaxNode::Sequence(items)) => Some(items),
            _ => None,
        }
    }
}
