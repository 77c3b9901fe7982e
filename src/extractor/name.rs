// file: src/extractor/name.rs
// description: candidate name heuristics over the top of a resume
// reference: common resume header layouts

use crate::config::ExtractionConfig;
use crate::extractor::cascade::{Tier, TierHit, first_hit};
use crate::extractor::lines::lines;
use crate::extractor::patterns::{BANNER_STOP_WORDS, CAPS_BANNER, NAME_LABEL};

pub fn extract_name(text: &str) -> String {
    extract_name_with(text, &ExtractionConfig::default())
}

pub fn extract_name_with(text: &str, config: &ExtractionConfig) -> String {
    name_hit(text, config)
        .map(|hit| hit.value)
        .unwrap_or_default()
}

/// Runs the name tiers, most specific first:
/// a `Name:` label, then a short plain line, then an all-caps banner.
pub fn name_hit(text: &str, config: &ExtractionConfig) -> Option<TierHit> {
    let lines = lines(text);
    let tiers: [Tier<[&str]>; 3] = [
        Tier {
            name: "labeled_field",
            run: labeled_field,
        },
        Tier {
            name: "short_plain_line",
            run: short_plain_line,
        },
        Tier {
            name: "caps_banner",
            run: caps_banner,
        },
    ];
    first_hit(&tiers, lines.as_slice(), config)
}

fn labeled_field(lines: &[&str], config: &ExtractionConfig) -> Option<String> {
    lines
        .iter()
        .take(config.name_scan_lines)
        .find_map(|line| NAME_LABEL.captures(line))
        .map(|caps| caps[1].trim().to_string())
}

fn short_plain_line(lines: &[&str], config: &ExtractionConfig) -> Option<String> {
    lines
        .iter()
        .take(config.header_lines)
        .find(|line| looks_like_name(line))
        .map(|line| line.to_string())
}

fn caps_banner(lines: &[&str], config: &ExtractionConfig) -> Option<String> {
    lines
        .iter()
        .take(config.header_lines)
        .find(|line| {
            CAPS_BANNER.is_match(line)
                && !BANNER_STOP_WORDS.iter().any(|word| line.contains(word))
        })
        .map(|line| line.trim().to_string())
}

fn looks_like_name(line: &str) -> bool {
    if !line.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let words = line.split_whitespace().count();
    (2..=4).contains(&words) && line.chars().count() < 40
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_field() {
        let text = "Name: Priya Shah\nData Engineer\npriya@x.com\n(91) 98765-43210";
        assert_eq!(extract_name(text), "Priya Shah");
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(extract_name("candidate name - Li Wei"), "Li Wei");
        assert_eq!(extract_name("FULL NAME:   Ana Maria Souza  "), "Ana Maria Souza");
    }

    #[test]
    fn test_label_beats_banner() {
        let text = "JOHN SMITH\nSenior Developer\nName: Jane Doe";
        let hit = name_hit(text, &ExtractionConfig::default()).unwrap();
        assert_eq!(hit.tier, "labeled_field");
        assert_eq!(hit.value, "Jane Doe");
    }

    #[test]
    fn test_short_plain_line() {
        let text = "jane@x.io\n+1 555 123 4567\nJane Q Doe\nSoftware Engineer";
        assert_eq!(extract_name(text), "Jane Q Doe");
    }

    #[test]
    fn test_caps_banner_skips_title_words() {
        let text = "RESUME\nMADONNA\nsinger@pop.com";
        let hit = name_hit(text, &ExtractionConfig::default()).unwrap();
        assert_eq!(hit.tier, "caps_banner");
        assert_eq!(hit.value, "MADONNA");
    }

    #[test]
    fn test_header_window() {
        let mut text = String::new();
        for i in 0..6 {
            text.push_str(&format!("line {}\n", i));
        }
        text.push_str("Jane Doe\n");
        assert_eq!(extract_name(&text), "");

        let mut labeled = String::new();
        for i in 0..11 {
            labeled.push_str(&format!("filler {}\n", i));
        }
        assert_eq!(extract_name(&format!("{}Name: Jane Doe", labeled)), "Jane Doe");
        assert_eq!(extract_name(&format!("{}x 11\nName: Jane Doe", labeled)), "");
    }

    #[test]
    fn test_long_or_single_word_lines_rejected() {
        assert_eq!(extract_name("Summary"), "");
        assert_eq!(
            extract_name("Experienced engineer building distributed systems at scale"),
            ""
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_name(""), "");
        assert_eq!(extract_name("\n\r\n  \n"), "");
    }
}
