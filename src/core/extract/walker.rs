use crate::core::buffer::SourceBuffer;
use crate::core::data::FunctionCall;
use crate::core::extract::{ExtractOptions, extract_parameters};
use crate::core::syntax::{SyntaxNode, keys};
use crate::issues::Issue;

/// Result of walking one syntax tree.
#[derive(Debug, Default)]
pub struct CallExtraction {
    /// Every call expression found, in source order.
    pub calls: Vec<FunctionCall>,
    /// Spans that could not be read while resolving parameters.
    pub issues: Vec<Issue>,
}

/// Collect all call expressions under `node`, depth-first and in source order.
///
/// Nodes missing the fields a call or parameter needs are skipped without an issue.
pub fn extract_calls(
    node: &SyntaxNode,
    source: &SourceBuffer,
    options: &ExtractOptions,
) -> CallExtraction {
    let mut collector = CallCollector {
        source,
        options,
        result: CallExtraction::default(),
    };
    collector.visit(node);
    collector.result
}

struct CallCollector<'a> {
    source: &'a SourceBuffer,
    options: &'a ExtractOptions,
    result: CallExtraction,
}

impl CallCollector<'_> {
    fn visit(&mut self, node: &SyntaxNode) {
        match node {
            SyntaxNode::Sequence(items) => {
                for item in items {
                    self.visit(item);
                }
            }
            SyntaxNode::Object(_) if node.kind() == Some(self.options.call_kind.as_str()) => {
                if let Some(call) = self.build_call(node) {
                    self.result.calls.push(call);
                }
                if self.options.descend_into_calls
                    && let Some(substructure) = node.substructure()
                {
                    self.visit(substructure);
                }
            }
            SyntaxNode::Object(_) => {
                if let Some(substructure) = node.substructure() {
                    self.visit(substructure);
                }
            }
            SyntaxNode::Leaf(_) => {}
        }
    }

    /// A call needs a `key.name` string and a `key.substructure` sequence.
    fn build_call(&mut self, node: &SyntaxNode) -> Option<FunctionCall> {
        let name = node.str_field(keys::NAME)?;
        let children = node.substructure_items()?;
        let parameters = extract_parameters(
            children,
            self.source,
            &self.options.parameter_kind,
            &mut self.result.issues,
        );
        let offset = node
            .int_field(keys::OFFSET)
            .and_then(|offset| usize::try_from(offset).ok());

        Some(FunctionCall::new(name, parameters, offset))
    }
}
