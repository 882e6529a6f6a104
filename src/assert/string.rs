// Normalized string equality assertions

use crate::assert::outcome::{AssertionResult, expect_pass};
use crate::normalize::{collapse_whitespace, normalize_line_endings};

/// Compare two strings after collapsing whitespace runs in both.
pub fn check_string_data_eq(expected: &str, actual: &str) -> AssertionResult {
    let expected_norm = collapse_whitespace(expected);
    let actual_norm = collapse_whitespace(actual);

    if expected_norm == actual_norm {
        return AssertionResult::Pass;
    }

    tracing::debug!(
        expected = %expected_norm,
        actual = %actual_norm,
        "string mismatch after whitespace collapse"
    );
    AssertionResult::mismatch_with_diff(
        "Strings differ after whitespace collapse",
        expected_norm,
        actual_norm,
    )
}

/// Compare two strings after normalizing line endings and trimming both.
pub fn check_string_safe_eq(expected: &str, actual: &str) -> AssertionResult {
    let expected_norm = normalize_line_endings(expected).trim().to_string();
    let actual_norm = normalize_line_endings(actual).trim().to_string();

    if expected_norm == actual_norm {
        return AssertionResult::Pass;
    }

    tracing::debug!(
        expected = %expected_norm,
        actual = %actual_norm,
        "string mismatch after line-ending normalization"
    );
    AssertionResult::mismatch_with_diff(
        "Strings differ after line-ending normalization",
        expected_norm,
        actual_norm,
    )
}

/// Assert equality of whitespace-collapsed forms.
#[track_caller]
pub fn assert_string_data_eq(expected: &str, actual: &str, message: &str) {
    expect_pass(check_string_data_eq(expected, actual), message);
}

/// Assert equality of line-ending-normalized, trimmed forms.
#[track_caller]
pub fn assert_string_safe_eq(expected: &str, actual: &str, message: &str) {
    expect_pass(check_string_safe_eq(expected, actual), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_eq_collapses_runs() {
        assert!(check_string_data_eq("a  b\tc", "a b  c").is_pass());
    }

    #[test]
    fn test_data_eq_is_not_trimmed() {
        // A boundary run still collapses to one space, so it must match.
        assert!(!check_string_data_eq("a ", "a").is_pass());
        assert!(check_string_data_eq("a \t", "a ").is_pass());
    }

    #[test]
    fn test_data_eq_mismatch_carries_normalized_forms() {
        let result = check_string_data_eq("a  b", "a  c");
        if let AssertionResult::Mismatch {
            expected, actual, ..
        } = result
        {
            assert_eq!(expected, Some("a b".to_string()));
            assert_eq!(actual, Some("a c".to_string()));
        } else {
            panic!("Expected Mismatch");
        }
    }

    #[test]
    fn test_safe_eq_crlf_and_trim() {
        assert!(check_string_safe_eq("  a\r\nb\n", "a\nb").is_pass());
    }

    #[test]
    fn test_safe_eq_preserves_inner_whitespace() {
        // Only line endings are normalized; inner runs stay significant.
        assert!(!check_string_safe_eq("a  b", "a b").is_pass());
    }

    #[test]
    #[should_panic(expected = "Strings differ after whitespace collapse")]
    fn test_assert_data_eq_panics() {
        assert_string_data_eq("a", "b", "");
    }

    #[test]
    #[should_panic(expected = "query output")]
    fn test_assert_safe_eq_panics_with_message() {
        assert_string_safe_eq("a", "b", "query output");
    }
}
