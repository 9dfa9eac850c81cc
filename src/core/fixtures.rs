//! Builders for SourceKit-shaped structure in unit tests.
//!
//! Offsets are computed by searching the source text, so fixtures stay correct when
//! the Swift snippets change.

use serde_json::{Value, json};

use crate::core::syntax::SyntaxNode;

pub(crate) fn find(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in `{haystack}`"))
}

/// A parameter node with explicit spans.
pub(crate) fn parameter(
    name_offset: usize,
    name_length: usize,
    body_offset: usize,
    body_length: usize,
) -> Value {
    json!({
        "key.kind": "source.lang.swift.decl.var.parameter",
        "key.offset": name_offset,
        "key.length": (body_offset + body_length).saturating_sub(name_offset),
        "key.nameoffset": name_offset,
        "key.namelength": name_length,
        "key.bodyoffset": body_offset,
        "key.bodylength": body_length,
    })
}

/// A call node for `snippet`, e.g. `NSLocalizedString("k", comment: "c")`.
///
/// `parameters` are `(label, body)` pairs located left to right inside the snippet;
/// an empty label is a positional argument.
pub(crate) fn call(source: &str, snippet: &str, parameters: &[(&str, &str)]) -> Value {
    let offset = find(source, snippet);
    let name = &snippet[..find(snippet, "(")];
    let mut cursor = offset + name.len() + 1;

    let children: Vec<Value> = parameters
        .iter()
        .map(|(label, body)| {
            let text = if label.is_empty() {
                body.to_string()
            } else {
                format!("{label}: {body}")
            };
            let start = cursor + find(&source[cursor..], &text);
            cursor = start + text.len();
            if label.is_empty() {
                parameter(start, 0, start, body.len())
            } else {
                parameter(start, label.len(), start + label.len() + 2, body.len())
            }
        })
        .collect();

    json!({
        "key.kind": "source.lang.swift.expr.call",
        "key.name": name,
        "key.offset": offset,
        "key.length": snippet.len(),
        "key.nameoffset": offset,
        "key.namelength": name.len(),
        "key.bodyoffset": offset + name.len() + 1,
        "key.bodylength": snippet.len() - name.len() - 2,
        "key.substructure": children,
    })
}

/// Attach children to a node built by one of the helpers above.
pub(crate) fn with_substructure(mut node: Value, children: Vec<Value>) -> Value {
    node["key.substructure"] = Value::Array(children);
    node
}

/// A declaration-like container (class, function) holding `children`.
pub(crate) fn container(kind: &str, name: &str, children: Vec<Value>) -> Value {
    json!({
        "key.kind": kind,
        "key.name": name,
        "key.substructure": children,
    })
}

/// Top-level structure as returned by `sourcekitten structure`.
pub(crate) fn root(source: &str, children: Vec<Value>) -> SyntaxNode {
    serde_json::from_value(json!({
        "key.diagnostic_stage": "source.diagnostic.stage.swift.parse",
        "key.offset": 0,
        "key.length": source.len(),
        "key.substructure": children,
    }))
    .expect("fixture is a valid structure")
}
