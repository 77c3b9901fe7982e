// file: src/pipeline/merge.rs
// description: combines authoritative backend fields with locally derived fallbacks

use crate::extractor::CandidateExtractor;
use crate::models::{BackendRecord, Field, ResumeRecord, coerce_score};
use crate::pipeline::collection::sort_canonical;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    extractor: CandidateExtractor,
}

impl RecordBuilder {
    pub fn new(extractor: CandidateExtractor) -> Self {
        Self { extractor }
    }

    /// Builds one display record. Derivation only runs for fields the
    /// backend left empty, and the source texts are carried over untouched.
    pub fn build(&self, raw: BackendRecord) -> ResumeRecord {
        let text = raw.extracted_text.as_deref().unwrap_or_default();
        let job_description = raw.job_description.as_deref().unwrap_or_default();

        let candidate_name =
            Field::resolve(raw.candidate_name.as_deref(), || self.extractor.name(text));
        let candidate_email =
            Field::resolve(raw.candidate_email.as_deref(), || self.extractor.email(text));
        let candidate_phone =
            Field::resolve(raw.candidate_phone.as_deref(), || self.extractor.phone(text));
        let job_role = Field::resolve(raw.job_role.as_deref(), || {
            self.extractor.job_role(job_description, text)
        });

        let record = ResumeRecord {
            id: raw.resolved_id().map(str::to_string),
            file_name: raw.file_name.clone().unwrap_or_default(),
            uploaded_at: raw.resolved_uploaded_at().map(str::to_string),
            ats_score: coerce_score(raw.ats_score.as_ref()),
            match_percentage: coerce_score(raw.match_percentage.as_ref()),
            rating: raw.rating.clone().unwrap_or_default(),
            candidate_name,
            candidate_email,
            candidate_phone,
            job_role,
            extracted_text: raw.extracted_text,
            job_description_text: raw.job_description,
        };

        debug!(
            id = record.id.as_deref().unwrap_or("-"),
            derived_name = record.candidate_name.is_derived(),
            derived_email = record.candidate_email.is_derived(),
            derived_phone = record.candidate_phone.is_derived(),
            derived_role = record.job_role.is_derived(),
            "built resume record"
        );

        record
    }

    /// Builds every record and ranks them by match percentage.
    pub fn build_all(&self, raws: Vec<BackendRecord>) -> Vec<ResumeRecord> {
        let records = raws.into_iter().map(|raw| self.build(raw)).collect();
        sort_canonical(records)
    }
}

pub fn build_record(raw: BackendRecord) -> ResumeRecord {
    RecordBuilder::default().build(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn backend(value: serde_json::Value) -> BackendRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_authoritative_name_is_kept() {
        let record = build_record(backend(json!({
            "id": "r1",
            "candidateName": "Already Set",
            "extractedText": "Name: Someone Else"
        })));
        assert_eq!(record.candidate_name, Field::Authoritative("Already Set".to_string()));
    }

    #[test]
    fn test_missing_fields_are_derived() {
        let record = build_record(backend(json!({
            "id": "r2",
            "fileName": "priya.pdf",
            "extractedText": "Name: Priya Shah\nData Engineer\npriya@x.com\n(91) 98765-43210",
            "jobDescription": "Role: Backend Engineer\nWe move money.",
            "atsScore": "81.25",
            "matchPercentage": 64,
            "candidateEmail": ""
        })));

        assert_eq!(record.id.as_deref(), Some("r2"));
        assert_eq!(record.file_name, "priya.pdf");
        assert_eq!(record.candidate_name, Field::Derived("Priya Shah".to_string()));
        assert_eq!(record.candidate_email, Field::Derived("priya@x.com".to_string()));
        assert_eq!(record.candidate_phone.as_str(), "(91) 98765-43210");
        assert_eq!(record.job_role, Field::Derived("Backend Engineer".to_string()));
        assert_eq!(record.ats_score, 81.25);
        assert_eq!(record.match_percentage, 64.0);
    }

    #[test]
    fn test_text_inputs_are_not_mutated() {
        let text = "  JANE DOE  \r\nObjective: Seeking a QA position.\r\n";
        let record = build_record(backend(json!({ "extractedText": text })));

        assert_eq!(record.extracted_text.as_deref(), Some(text));
        assert_eq!(record.job_description_text, None);
        assert_eq!(record.job_role.as_str(), "a QA position");
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        let record = build_record(BackendRecord::default());

        assert_eq!(record.id, None);
        assert_eq!(record.file_name, "");
        assert_eq!(record.ats_score, 0.0);
        assert_eq!(record.match_percentage, 0.0);
        assert!(record.candidate_name.is_absent());
        assert!(record.candidate_email.is_absent());
        assert!(record.candidate_phone.is_absent());
        assert!(record.job_role.is_absent());
        assert_eq!(record.display_name(), "Unknown");
        assert_eq!(record.display_rating(), "-");
    }

    #[test]
    fn test_build_all_ranks_by_match() {
        let builder = RecordBuilder::default();
        let records = builder.build_all(vec![
            backend(json!({"id": "low", "matchPercentage": 10})),
            backend(json!({"id": "high", "matchPercentage": "90"})),
            backend(json!({"id": "bad", "matchPercentage": "??"})),
        ]);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["high", "low", "bad"]);
    }

    #[test]
    fn test_never_overwrites_any_authoritative_field() {
        let record = build_record(backend(json!({
            "extractedText": "Name: Derived Name\nderived@x.com\n555-123-4567",
            "jobDescription": "Role: Derived Role",
            "candidateName": "Backend Name",
            "candidateEmail": "backend@x.com",
            "candidatePhone": "000",
            "jobRole": "Backend Role"
        })));

        assert!(record.candidate_name.is_authoritative());
        assert!(record.candidate_email.is_authoritative());
        assert_eq!(record.candidate_phone.as_str(), "000");
        assert_eq!(record.job_role.as_str(), "Backend Role");
    }
}
