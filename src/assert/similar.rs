// Order-insensitive structural comparison over JSON values

use std::cmp::Ordering;

use serde_json::Value;

use crate::assert::outcome::{AssertionResult, expect_pass};

/// Compare two structures ignoring ordering.
///
/// When `use_sort` is set, or `expected` is a sequence, both operands are
/// deep-sorted by value before comparison; otherwise both are deep-sorted
/// by key. The operands themselves are left untouched.
pub fn check_array_similar(expected: &Value, actual: &Value, use_sort: bool) -> AssertionResult {
    let mut expected_sorted = expected.clone();
    let mut actual_sorted = actual.clone();

    if use_sort || expected.is_array() {
        recursive_sort(&mut expected_sorted);
        recursive_sort(&mut actual_sorted);
    } else {
        recursive_sort_keys(&mut expected_sorted);
        recursive_sort_keys(&mut actual_sorted);
    }

    if expected_sorted == actual_sorted {
        return AssertionResult::Pass;
    }

    tracing::debug!("structural mismatch after deep sort");
    AssertionResult::mismatch_with_diff(
        "Structures differ after deep sort",
        to_pretty(&expected_sorted),
        to_pretty(&actual_sorted),
    )
}

/// Assert order-insensitive structural equality.
#[track_caller]
pub fn assert_array_similar(expected: &Value, actual: &Value, message: &str) {
    expect_pass(check_array_similar(expected, actual, false), message);
}

/// Assert structural equality with the value sort forced on.
#[track_caller]
pub fn assert_array_sorted_similar(expected: &Value, actual: &Value, message: &str) {
    expect_pass(check_array_similar(expected, actual, true), message);
}

/// In-place: rebuild every mapping with keys ascending, recursing through
/// nested mappings and sequences.
pub fn recursive_sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, child) in entries.iter_mut() {
                recursive_sort_keys(child);
            }
            *map = entries.into_iter().collect();
        }
        Value::Array(items) => {
            for item in items {
                recursive_sort_keys(item);
            }
        }
        _ => {}
    }
}

/// In-place: sort every sequence ascending by canonical value order,
/// recursing through nested sequences and mappings. Children are sorted
/// before their parent so equal-after-sorting subtrees compare equal.
pub fn recursive_sort(value: &mut Value) {
    match value {
        Value::Array(items) => {
            for item in items.iter_mut() {
                recursive_sort(item);
            }
            items.sort_by(value_cmp);
        }
        Value::Object(map) => {
            for (_, child) in map.iter_mut() {
                recursive_sort(child);
            }
        }
        _ => {}
    }
}

/// Canonical total order: variant rank, then inner comparison.
fn value_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            // serde_json numbers are never NaN, so f64 comparison is total here.
            let xf = x.as_f64().unwrap_or(0.0);
            let yf = y.as_f64().unwrap_or(0.0);
            xf.partial_cmp(&yf).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xi, yi) in x.iter().zip(y.iter()) {
                match value_cmp(xi, yi) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => {
            let mut xs: Vec<(&String, &Value)> = x.iter().collect();
            let mut ys: Vec<(&String, &Value)> = y.iter().collect();
            xs.sort_by(|a, b| a.0.cmp(b.0));
            ys.sort_by(|a, b| a.0.cmp(b.0));

            for (&(xk, xv), &(yk, yv)) in xs.iter().zip(ys.iter()) {
                match xk.cmp(yk) {
                    Ordering::Equal => {}
                    other => return other,
                }
                match value_cmp(xv, yv) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            xs.len().cmp(&ys.len())
        }
        _ => variant_rank(a).cmp(&variant_rank(b)),
    }
}

fn variant_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
