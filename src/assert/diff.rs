use console::Style;
use dissimilar::{Chunk, diff};
use serde_json::Value;
use std::fmt::Write;

/// Generates a colored character diff between two texts
pub fn render_text_diff(expected: &str, actual: &str) -> String {
    let diff_chunks = diff(expected, actual);

    let mut output = String::new();
    let _ = writeln!(output, "Diff (Expected - / Actual +):");

    for chunk in diff_chunks {
        match chunk {
            Chunk::Equal(text) => {
                let style = Style::new().dim();
                let _ = write!(output, "{}", style.apply_to(text));
            }
            Chunk::Delete(text) => {
                let style = Style::new().red();
                let _ = write!(output, "{}", style.apply_to(text));
            }
            Chunk::Insert(text) => {
                let style = Style::new().green();
                let _ = write!(output, "{}", style.apply_to(text));
            }
        }
    }

    output
}

/// Pretty-prints both values and diffs the texts
pub fn render_json_diff(expected: &Value, actual: &Value) -> String {
    let expected_str =
        serde_json::to_string_pretty(expected).unwrap_or_else(|_| expected.to_string());
    let actual_str = serde_json::to_string_pretty(actual).unwrap_or_else(|_| actual.to_string());

    render_text_diff(&expected_str, &actual_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_text_diff() {
        let diff = render_text_diff("line one", "line two");

        assert!(diff.contains("Diff (Expected - / Actual +):"));
        assert!(diff.contains("one"));
        assert!(diff.contains("two"));
    }

    #[test]
    fn test_render_json_diff() {
        let expected = json!({
            "name": "Alice",
            "age": 30
        });
        let actual = json!({
            "name": "Bob",
            "age": 30
        });

        let diff = render_json_diff(&expected, &actual);

        // The distinct values are present; shared content survives as context.
        assert!(diff.contains("Alice"));
        assert!(diff.contains("Bob"));
        assert!(diff.contains("\"age\": 30"));
    }
}
