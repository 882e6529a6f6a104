// String canonicalization used by the string assertions

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace run regex"));

/// Collapse every run of consecutive whitespace into a single space.
///
/// Leading and trailing runs are kept (as one space each); trimming is the
/// caller's decision.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(input, " ").into_owned()
}

/// Convert all line-ending variants (CRLF, lone CR) to `\n`.
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}
