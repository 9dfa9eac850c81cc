use crate::core::buffer::SourceBuffer;
use crate::core::data::Parameter;
use crate::core::syntax::{SyntaxNode, keys};
use crate::issues::{Issue, IssueLocation, SpanField, UnreadableSpanIssue};

/// Offset/length fields a parameter node must carry to be extractable.
struct ParameterSpans {
    name_offset: i64,
    name_length: i64,
    body_offset: i64,
    body_length: i64,
}

impl ParameterSpans {
    fn of(node: &SyntaxNode, parameter_kind: &str) -> Option<Self> {
        if node.kind()? != parameter_kind {
            return None;
        }
        // Not used for extraction, but SourceKit always emits them for real parameters.
        node.int_field(keys::OFFSET)?;
        node.int_field(keys::LENGTH)?;

        Some(Self {
            name_offset: node.int_field(keys::NAME_OFFSET)?,
            name_length: node.int_field(keys::NAME_LENGTH)?,
            body_offset: node.int_field(keys::BODY_OFFSET)?,
            body_length: node.int_field(keys::BODY_LENGTH)?,
        })
    }
}

/// Resolve the parameters among a call's children, keeping source order.
///
/// Children that are not parameter nodes, or lack any offset/length field, are
/// skipped. Spans that cannot be read become empty strings and are recorded in
/// `issues`.
pub fn extract_parameters(
    children: &[SyntaxNode],
    source: &SourceBuffer,
    parameter_kind: &str,
    issues: &mut Vec<Issue>,
) -> Vec<Parameter> {
    children
        .iter()
        .filter_map(|child| ParameterSpans::of(child, parameter_kind))
        .map(|spans| {
            let name = resolve_span(
                source,
                spans.name_offset,
                spans.name_length,
                SpanField::Name,
                issues,
            );
            let body = resolve_span(
                source,
                spans.body_offset,
                spans.body_length,
                SpanField::Body,
                issues,
            );
            Parameter::new(name, body, usize::try_from(spans.body_offset).unwrap_or(0))
        })
        .collect()
}

fn resolve_span(
    source: &SourceBuffer,
    offset: i64,
    length: i64,
    field: SpanField,
    issues: &mut Vec<Issue>,
) -> String {
    if length <= 0 {
        return String::new();
    }
    match source.span(offset, length) {
        Ok(text) => text.to_string(),
        Err(error) => {
            issues.push(Issue::UnreadableSpan(UnreadableSpanIssue {
                location: IssueLocation::in_source(source, usize::try_from(offset).ok()),
                field,
                error,
            }));
            String::new()
        }
    }
}
