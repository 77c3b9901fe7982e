// file: src/extractor/email.rs
// description: first email address found in free text

use crate::extractor::patterns::EMAIL;

/// Returns the first `local@domain.tld` token in `text`, or an empty string.
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
