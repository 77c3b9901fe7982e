// file: src/extractor/patterns.rs
// description: compiled regex patterns for candidate field extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Contact details
    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}"
    ).expect("EMAIL regex is valid");

    pub static ref PHONE: Regex = Regex::new(
        r"(\+?[0-9]{1,3}[-.\s]?)?(\(?[0-9]{2,4}\)?[-.\s]?)?[0-9\-.\s]{6,15}[0-9]"
    ).expect("PHONE regex is valid");

    // Name header lines
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)^(?:Name|Full Name|Candidate Name)\s*[:\-]\s*(.+)$"
    ).expect("NAME_LABEL regex is valid");

    pub static ref CAPS_BANNER: Regex = Regex::new(
        r"^[A-Z\s]{3,40}$"
    ).expect("CAPS_BANNER regex is valid");

    // Job role
    pub static ref ROLE_LABEL: Regex = Regex::new(
        r"(?i)^(?:Job Title|Role|Position)\s*[:\-]\s*(.+)$"
    ).expect("ROLE_LABEL regex is valid");

    pub static ref OBJECTIVE: Regex = Regex::new(
        r"(?i)(Objective|Career Objective|Seeking)\s*[:\-]?\s*(.+)"
    ).expect("OBJECTIVE regex is valid");

    pub static ref OBJECTIVE_PREFIX: Regex = Regex::new(
        r"(?i)^(?:Career Objective|Objective|Seeking)(?:\s*:\s*|\s*-\s+|\s+)"
    ).expect("OBJECTIVE_PREFIX regex is valid");
}

/// Words that mark a title banner rather than a person's name.
pub const BANNER_STOP_WORDS: [&str; 2] = ["RESUME", "CURRICULUM"];

pub fn digit_count(candidate: &str) -> usize {
    candidate.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn is_plausible_phone(candidate: &str) -> bool {
    (7..=15).contains(&digit_count(candidate))
}
