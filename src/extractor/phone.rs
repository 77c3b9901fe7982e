// file: src/extractor/phone.rs
// description: phone number extraction with digit-count plausibility filter
// reference: common western phone number layouts

use crate::config::PhoneFallback;
use crate::extractor::patterns::{PHONE, is_plausible_phone};

/// Returns the first phone-shaped token with 7 to 15 digits.
///
/// When nothing passes the digit check the first raw match is returned
/// instead, matching the dashboard's long-standing behaviour. Use
/// [`PhoneExtractor`] with [`PhoneFallback::Empty`] to opt out.
pub fn extract_phone(text: &str) -> String {
    PhoneExtractor::default().extract(text)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor {
    fallback: PhoneFallback,
}

impl PhoneExtractor {
    pub fn new(fallback: PhoneFallback) -> Self {
        Self { fallback }
    }

    pub fn extract(&self, text: &str) -> String {
        let mut first_match = None;

        for candidate in PHONE.find_iter(text) {
            let candidate = candidate.as_str().trim();
            if is_plausible_phone(candidate) {
                return candidate.to_string();
            }
            first_match.get_or_insert(candidate);
        }

        match (self.fallback, first_match) {
            (PhoneFallback::FirstMatch, Some(raw)) => raw.to_string(),
            _ => String::new(),
        }
    }
}
