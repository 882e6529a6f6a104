// Assertion outcomes and the bridge to the host test framework

use std::fmt::Write;

use thiserror::Error;

use super::diff::render_text_diff;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Pass,
    Mismatch {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    Failure(String),
}

impl AssertionResult {
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn mismatch_with_diff(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Convert into a plain `Result` for callers that branch instead of unwinding.
    pub fn into_result(self) -> Result<(), AssertionError> {
        match self {
            Self::Pass => Ok(()),
            Self::Mismatch {
                message,
                expected,
                actual,
            } => {
                let mut detail = message;
                if let (Some(e), Some(a)) = (expected, actual) {
                    let _ = write!(detail, "\n  expected: {}\n  actual:   {}", e, a);
                }
                Err(AssertionError::Mismatch(detail))
            }
            Self::Failure(message) => Err(AssertionError::Failure(message)),
        }
    }
}

/// The two failure kinds surfaced by this crate
#[derive(Debug, Error)]
pub enum AssertionError {
    /// Values differ after normalization or sorting
    #[error("assertion mismatch: {0}")]
    Mismatch(String),
    /// An expected error or panic never happened
    #[error("assertion failure: {0}")]
    Failure(String),
}

/// Raise a failing outcome to the host test framework.
///
/// `message` is caller-supplied context; an empty string means none. The
/// panic message carries the check's own detail and, when both sides are
/// known, a colored diff.
#[track_caller]
pub fn expect_pass(result: AssertionResult, message: &str) {
    match result {
        AssertionResult::Pass => {}
        AssertionResult::Mismatch {
            message: detail,
            expected,
            actual,
        } => {
            let mut out = String::new();
            if !message.is_empty() {
                let _ = writeln!(out, "{}", message);
            }
            out.push_str(&detail);
            if let (Some(e), Some(a)) = (expected.as_deref(), actual.as_deref()) {
                out.push('\n');
                out.push_str(&render_text_diff(e, a));
            }
            panic!("{}", out);
        }
        AssertionResult::Failure(detail) => {
            if message.is_empty() {
                panic!("{}", detail);
            }
            panic!("{}\n{}", message, detail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_constructor() {
        let result = AssertionResult::mismatch("values differ");
        if let AssertionResult::Mismatch {
            message,
            expected,
            actual,
        } = result
        {
            assert_eq!(message, "values differ");
            assert!(expected.is_none());
            assert!(actual.is_none());
        } else {
            panic!("Expected Mismatch");
        }
    }

    #[test]
    fn test_mismatch_with_diff_constructor() {
        let result = AssertionResult::mismatch_with_diff("values differ", "a", "b");
        if let AssertionResult::Mismatch {
            message,
            expected,
            actual,
        } = result
        {
            assert_eq!(message, "values differ");
            assert_eq!(expected, Some("a".to_string()));
            assert_eq!(actual, Some("b".to_string()));
        } else {
            panic!("Expected Mismatch");
        }
    }

    #[test]
    fn test_is_pass() {
        assert!(AssertionResult::Pass.is_pass());
        assert!(!AssertionResult::failure("nope").is_pass());
    }

    #[test]
    fn test_into_result_pass() {
        assert!(AssertionResult::Pass.into_result().is_ok());
    }

    #[test]
    fn test_into_result_mismatch_detail() {
        let err = AssertionResult::mismatch_with_diff("values differ", "a", "b")
            .into_result()
            .unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("assertion mismatch:"));
        assert!(text.contains("expected: a"));
        assert!(text.contains("actual:   b"));
    }

    #[test]
    fn test_into_result_failure_kind() {
        let err = AssertionResult::failure("no error raised")
            .into_result()
            .unwrap_err();
        assert!(matches!(err, AssertionError::Failure(_)));
    }

    #[test]
    fn test_expect_pass_is_silent_on_pass() {
        expect_pass(AssertionResult::Pass, "context");
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_expect_pass_panics_on_mismatch() {
        expect_pass(AssertionResult::mismatch("values differ"), "");
    }

    #[test]
    #[should_panic(expected = "context for the reader")]
    fn test_expect_pass_prefixes_caller_message() {
        expect_pass(
            AssertionResult::failure("no error raised"),
            "context for the reader",
        );
    }
}
