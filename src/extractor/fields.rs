// file: src/extractor/fields.rs
// description: bundles the candidate field heuristics behind one configuration

use crate::config::ExtractionConfig;
use crate::extractor::email::extract_email;
use crate::extractor::job_role::extract_job_role_with;
use crate::extractor::name::extract_name_with;
use crate::extractor::phone::PhoneExtractor;
use serde::Serialize;

/// Fields recovered from raw text. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_role: String,
}

/// Stateless and `Send + Sync`; one instance can serve every worker.
#[derive(Debug, Clone, Default)]
pub struct CandidateExtractor {
    config: ExtractionConfig,
    phone: PhoneExtractor,
}

impl CandidateExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        let phone = PhoneExtractor::new(config.phone_fallback);
        Self { config, phone }
    }

    pub fn name(&self, resume_text: &str) -> String {
        extract_name_with(resume_text, &self.config)
    }

    pub fn email(&self, resume_text: &str) -> String {
        extract_email(resume_text)
    }

    pub fn phone(&self, resume_text: &str) -> String {
        self.phone.extract(resume_text)
    }

    pub fn job_role(&self, job_description: &str, resume_text: &str) -> String {
        extract_job_role_with(job_description, resume_text, &self.config)
    }

    pub fn extract(&self, resume_text: &str, job_description: &str) -> CandidateFields {
        CandidateFields {
            name: self.name(resume_text),
            email: self.email(resume_text),
            phone: self.phone(resume_text),
            job_role: self.job_role(job_description, resume_text),
        }
    }
}
