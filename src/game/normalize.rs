//! Answer normalization shared by riddle construction and guess checking.

const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Word separators: Unicode White_Space minus NEL (U+0085), plus BOM (U+FEFF).
fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Reduce free text to lowercase alphanumeric words with articles removed.
///
/// Everything outside `[a-z0-9]` and whitespace is dropped after lowercasing,
/// the whole-word articles "a", "an" and "the" are removed, and the remaining
/// words are joined by single spaces. Absent input normalizes to `""`.
///
/// ```
/// use oldforest::game::normalize_answer;
///
/// assert_eq!(normalize_answer("The Shadow!"), "shadow");
/// assert_eq!(normalize_answer(None), "");
/// ```
pub fn normalize_answer<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(raw) = input.into() else {
        return String::new();
    };
    let kept: String = raw
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_separator(c))
        .collect();
    kept.split(is_separator)
        .filter(|word| !word.is_empty() && !ARTICLES.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
