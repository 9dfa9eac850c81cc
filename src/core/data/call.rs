//! Function call data collected during tree traversal.

use std::fmt;

/// One argument of a call, resolved against the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Argument label. Empty for positional (unlabeled) arguments.
    pub name: String,
    /// Raw argument text, including quotes for string literals.
    pub body: String,
    /// Byte offset of the body in the source file.
    pub offset: usize,
}

impl Parameter {
    pub fn new(name: impl Into<String>, body: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            offset,
        }
    }

    pub fn is_positional(&self) -> bool {
        self.name.is_empty()
    }
}

/// A call expression with its arguments in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Byte offset of the call expression, when the syntax node carries one.
    pub offset: Option<usize>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, offset: Option<usize>) -> Self {
        Self {
            name: name.into(),
            parameters,
            offset,
        }
    }

    /// First parameter with the given label. Use `""` for the positional one.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Body text of the first parameter with the given label.
    pub fn parameter_body(&self, name: &str) -> Option<&str> {
        self.parameter(name).map(|p| p.body.as_str())
    }
}

/// Renders the call as it would appear in source: `Name(body, label: body)`.
impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if !param.is_positional() {
                write!(f, "{}: ", param.name)?;
            }
            write!(f, "{}", param.body)?;
        }
        write!(f, ")")
    }
}
