// file: src/extractor/job_role.rs
// description: target job role from the job description, falling back to the resume objective

use crate::config::ExtractionConfig;
use crate::extractor::cascade::{Tier, TierHit, first_hit};
use crate::extractor::lines::{head, lines, truncate_chars};
use crate::extractor::patterns::{OBJECTIVE, OBJECTIVE_PREFIX, ROLE_LABEL};

#[derive(Debug, Clone, Copy)]
pub struct RoleSources<'a> {
    pub job_description: &'a str,
    pub resume: &'a str,
}

impl RoleSources<'_> {
    fn has_job_description(&self) -> bool {
        !self.job_description.trim().is_empty()
    }
}

pub fn extract_job_role(job_description: &str, resume: &str) -> String {
    extract_job_role_with(job_description, resume, &ExtractionConfig::default())
}

pub fn extract_job_role_with(
    job_description: &str,
    resume: &str,
    config: &ExtractionConfig,
) -> String {
    let sources = RoleSources {
        job_description,
        resume,
    };
    job_role_hit(&sources, config)
        .map(|hit| hit.value)
        .unwrap_or_default()
}

/// A non-blank job description always decides the role; the resume is only
/// read when no description was supplied.
pub fn job_role_hit(sources: &RoleSources<'_>, config: &ExtractionConfig) -> Option<TierHit> {
    let tiers: [Tier<RoleSources<'_>>; 3] = [
        Tier {
            name: "description_label",
            run: description_label,
        },
        Tier {
            name: "description_first_line",
            run: description_first_line,
        },
        Tier {
            name: "resume_objective",
            run: resume_objective,
        },
    ];
    first_hit(&tiers, sources, config)
}

fn description_label(sources: &RoleSources<'_>, config: &ExtractionConfig) -> Option<String> {
    if !sources.has_job_description() {
        return None;
    }
    head(sources.job_description, config.role_label_lines)
        .into_iter()
        .find_map(|line| ROLE_LABEL.captures(line))
        .map(|caps| caps[1].trim().to_string())
}

fn description_first_line(sources: &RoleSources<'_>, config: &ExtractionConfig) -> Option<String> {
    if !sources.has_job_description() {
        return None;
    }
    lines(sources.job_description)
        .first()
        .map(|line| truncate_chars(line, config.role_max_chars).to_string())
}

fn resume_objective(sources: &RoleSources<'_>, _config: &ExtractionConfig) -> Option<String> {
    if sources.has_job_description() {
        return None;
    }
    let caps = OBJECTIVE.captures(sources.resume)?;
    let sentence = caps[2]
        .split(['.', '|', '\n'])
        .next()
        .unwrap_or_default()
        .trim();
    Some(strip_objective_keywords(sentence).to_string())
}

// "Objective: Seeking a QA position" names the role after both keywords.
fn strip_objective_keywords(mut sentence: &str) -> &str {
    while let Some(prefix) = OBJECTIVE_PREFIX.find(sentence) {
        let rest = sentence[prefix.end()..].trim();
        if rest.is_empty() {
            break;
        }
        sentence = rest;
    }
    sentence
}
