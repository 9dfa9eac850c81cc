//! Common utility functions shared across the codebase.

/// Removes one pair of surrounding double quotes.
///
/// Text that does not both start and end with `"` is returned unchanged. A lone `"`
/// counts as quoted and trims to the empty string.
///
/// # Examples
///
/// ```
/// use genstrings::utils::trim_quotes;
///
/// assert_eq!(trim_quotes("\"hello\""), "hello");
/// assert_eq!(trim_quotes("\"\""), "");
/// assert_eq!(trim_quotes("\""), "");
/// assert_eq!(trim_quotes("hello"), "hello");
/// ```
pub fn trim_quotes(text: &str) -> &str {
    if !(text.starts_with('"') && text.ends_with('"')) {
        return text;
    }
    if text.len() > 1 {
        &text[1..text.len() - 1]
    } else {
        ""
    }
}

/// Checks if the text is a non-empty double-quoted string literal.
///
/// The literal must start and end with `"` and have at least one character between
/// the quotes, so `""` is not considered quoted.
///
/// # Examples
///
/// ```
/// use genstrings::utils::is_quoted;
///
/// assert!(is_quoted("\"x\""));
/// assert!(!is_quoted("\"\""));
/// assert!(!is_quoted("x"));
/// ```
pub fn is_quoted(text: &str) -> bool {
    text.chars().count() > 2 && text.starts_with('"') && text.ends_with('"')
}
