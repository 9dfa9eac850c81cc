pub mod call;
pub mod source;

pub use call::{FunctionCall, Parameter};
pub use source::{SourceContext, SourceLocation};
