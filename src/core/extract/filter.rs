use crate::core::data::FunctionCall;

/// Keep the calls whose name is exactly `target`, preserving order.
///
/// No qualification handling: `Bundle.main.localizedString` does not match
/// `localizedString`.
pub fn matching_calls(calls: Vec<FunctionCall>, target: &str) -> Vec<FunctionCall> {
    calls.into_iter().filter(|call| call.name == target).collect()
}
