//! Logging helpers for raw player input, so each command stays on one log line.

/// Longest slice of player input echoed into a log line.
pub const MAX_INPUT_PREVIEW: usize = 80;

/// Escape player input for single-line logging.
///
/// Quotes and backslashes are escaped so the value can sit inside `"..."`,
/// control characters use Rust escape syntax (`\n`, `\u{7}`), and input past
/// [`MAX_INPUT_PREVIEW`] characters is cut with an ellipsis.
pub fn escape_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len().min(MAX_INPUT_PREVIEW) + 4);
    for (count, ch) in input.chars().enumerate() {
        if count >= MAX_INPUT_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.extend(c.escape_default()),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_input, MAX_INPUT_PREVIEW};

    #[test]
    fn escapes_quotes_and_control_chars() {
        assert_eq!(escape_input("say \"hi\"\n"), "say \\\"hi\\\"\\n");
        assert_eq!(escape_input("a\\b\tc"), "a\\\\b\\tc");
        assert_eq!(escape_input("bell\u{7}"), "bell\\u{7}");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = "x".repeat(MAX_INPUT_PREVIEW + 20);
        let esc = escape_input(&long);
        assert_eq!(esc.chars().count(), MAX_INPUT_PREVIEW + 1);
        assert!(esc.ends_with('…'));
    }
}
