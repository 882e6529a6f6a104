// Expected-error assertions over fallible closures

use std::any::type_name;
use std::panic::UnwindSafe;

use crate::assert::outcome::{AssertionResult, expect_pass};

/// Numeric code carried by an error type, for code-checking assertions.
pub trait ErrorCode {
    fn error_code(&self) -> i32;
}

impl ErrorCode for std::io::Error {
    fn error_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(0)
    }
}

/// Run `op` and check that it fails with an error chain containing an `E`.
///
/// A wrapped `E` deeper in the chain still matches. When `message_prefix`
/// is given, the matched error's display form must start with it.
pub fn check_expected_err<E, T, F>(op: F, message_prefix: Option<&str>) -> AssertionResult
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce() -> anyhow::Result<T>,
{
    let err = match op() {
        Ok(_) => {
            return AssertionResult::failure(format!(
                "No error raised. expected: {}",
                type_name::<E>()
            ));
        }
        Err(err) => err,
    };

    match match_raised::<E>(&err, message_prefix) {
        Ok(_) => AssertionResult::Pass,
        Err(fail) => fail,
    }
}

/// Like [`check_expected_err`], additionally checking the matched error's code.
pub fn check_expected_err_code<E, T, F>(
    op: F,
    message_prefix: Option<&str>,
    code: i32,
) -> AssertionResult
where
    E: std::error::Error + ErrorCode + Send + Sync + 'static,
    F: FnOnce() -> anyhow::Result<T>,
{
    let err = match op() {
        Ok(_) => {
            return AssertionResult::failure(format!(
                "No error raised. expected: {}",
                type_name::<E>()
            ));
        }
        Err(err) => err,
    };

    let matched = match match_raised::<E>(&err, message_prefix) {
        Ok(matched) => matched,
        Err(fail) => return fail,
    };

    if matched.error_code() != code {
        return AssertionResult::mismatch_with_diff(
            "Error code mismatch",
            code.to_string(),
            matched.error_code().to_string(),
        );
    }

    AssertionResult::Pass
}

fn match_raised<'e, E>(
    err: &'e anyhow::Error,
    message_prefix: Option<&str>,
) -> Result<&'e E, AssertionResult>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let Some(matched) = err.chain().find_map(|cause| cause.downcast_ref::<E>()) else {
        return Err(AssertionResult::mismatch_with_diff(
            format!("Raised error does not match {}", type_name::<E>()),
            type_name::<E>(),
            format!("{:#}", err),
        ));
    };

    if let Some(prefix) = message_prefix {
        let text = matched.to_string();
        if !text.starts_with(prefix) {
            return Err(AssertionResult::mismatch_with_diff(
                "Error message does not start with expected prefix",
                prefix,
                text,
            ));
        }
    }

    Ok(matched)
}

/// Run `op` and check that it panics.
///
/// When `message_prefix` is given, the panic payload must be a string
/// starting with it.
pub fn check_panics(
    op: impl FnOnce() + UnwindSafe,
    message_prefix: Option<&str>,
) -> AssertionResult {
    let payload = match std::panic::catch_unwind(op) {
        Ok(()) => return AssertionResult::failure("No panic raised"),
        Err(payload) => payload,
    };

    if let Some(prefix) = message_prefix {
        let text = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());

        return match text {
            Some(text) if text.starts_with(prefix) => AssertionResult::Pass,
            Some(text) => AssertionResult::mismatch_with_diff(
                "Panic message does not start with expected prefix",
                prefix,
                text,
            ),
            None => AssertionResult::mismatch("Panic payload is not a string"),
        };
    }

    AssertionResult::Pass
}

/// Assert that `op` fails with an `E` in its error chain.
#[track_caller]
pub fn assert_expected_err<E, T, F>(op: F, message_prefix: Option<&str>, message: &str)
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce() -> anyhow::Result<T>,
{
    expect_pass(check_expected_err::<E, T, F>(op, message_prefix), message);
}

/// Assert that `op` fails with an `E` carrying the given code.
#[track_caller]
pub fn assert_expected_err_code<E, T, F>(
    op: F,
    message_prefix: Option<&str>,
    code: i32,
    message: &str,
) where
    E: std::error::Error + ErrorCode + Send + Sync + 'static,
    F: FnOnce() -> anyhow::Result<T>,
{
    expect_pass(
        check_expected_err_code::<E, T, F>(op, message_prefix, code),
        message,
    );
}

/// Assert that `op` panics, optionally with a payload prefix.
#[track_caller]
pub fn assert_panics(op: impl FnOnce() + UnwindSafe, message_prefix: Option<&str>, message: &str) {
    expect_pass(check_panics(op, message_prefix), message);
}
