// file: src/extractor/lines.rs
// description: splits raw document text into trimmed, non-empty lines

/// Splits on `\n` or `\r\n`, trims every line and drops blank ones.
/// Order is preserved and the returned slices borrow from `text`.
pub fn lines(text: &str) -> Vec<&str> {
    non_empty(text).collect()
}

/// First `limit` non-empty lines.
pub fn head(text: &str, limit: usize) -> Vec<&str> {
    non_empty(text).take(limit).collect()
}

fn non_empty(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Truncates to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
