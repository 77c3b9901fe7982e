// file: src/models/backend.rs
// description: resume record as returned by the screening backend
// reference: backend /resumes/user/{userId} response shape

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw listing entry. Every field is optional because the backend omits
/// whatever it could not compute; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_id: Option<String>,
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub upper_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
    #[serde(
        rename = "uploaded_at",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_at_snake: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub extracted_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_description: Option<String>,
    #[serde(default)]
    pub ats_score: Option<Value>,
    #[serde(default)]
    pub match_percentage: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub candidate_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub candidate_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub candidate_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_role: Option<String>,
}

impl BackendRecord {
    /// The backend has used `id`, `_id` and `ID` over time; first non-empty wins.
    pub fn resolved_id(&self) -> Option<&str> {
        [&self.id, &self.object_id, &self.upper_id]
            .into_iter()
            .filter_map(|id| id.as_deref())
            .find(|id| !id.is_empty())
    }

    /// Upload time under either `uploadedAt` or `uploaded_at`; camelCase wins.
    pub fn resolved_uploaded_at(&self) -> Option<&str> {
        [&self.uploaded_at, &self.uploaded_at_snake]
            .into_iter()
            .filter_map(|at| at.as_deref())
            .find(|at| !at.is_empty())
    }
}

/// Accepts strings and numbers; anything else reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let record: BackendRecord = serde_json::from_value(json!({
            "id": "r-1",
            "fileName": "priya.pdf",
            "uploadedAt": "2024-05-01T10:00:00Z",
            "extractedText": "Name: Priya Shah",
            "jobDescription": "Role: Backend Engineer",
            "atsScore": 71.5,
            "matchPercentage": "64",
            "rating": "Good",
            "candidateName": "Priya Shah",
            "userId": "u-9",
            "somethingNew": {"nested": true}
        }))
        .unwrap();

        assert_eq!(record.resolved_id(), Some("r-1"));
        assert_eq!(record.file_name.as_deref(), Some("priya.pdf"));
        assert_eq!(record.match_percentage, Some(json!("64")));
        assert_eq!(record.candidate_email, None);
    }

    #[test]
    fn test_alternate_id_keys() {
        let mongo: BackendRecord = serde_json::from_value(json!({"_id": "abc"})).unwrap();
        assert_eq!(mongo.resolved_id(), Some("abc"));

        let upper: BackendRecord = serde_json::from_value(json!({"id": "", "ID": 42})).unwrap();
        assert_eq!(upper.resolved_id(), Some("42"));

        let none: BackendRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(none.resolved_id(), None);
    }

    #[test]
    fn test_non_string_fields_read_as_absent() {
        let record: BackendRecord = serde_json::from_value(json!({
            "candidateName": null,
            "candidatePhone": 5551234567u64,
            "jobRole": ["not", "a", "string"],
            "uploaded_at": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(record.candidate_name, None);
        assert_eq!(record.candidate_phone.as_deref(), Some("5551234567"));
        assert_eq!(record.job_role, None);
        assert_eq!(record.resolved_uploaded_at(), Some("2024-01-01"));
    }

    #[test]
    fn test_both_upload_keys_are_accepted() {
        let record: BackendRecord = serde_json::from_value(json!({
            "id": "1",
            "uploadedAt": "2024-01-01",
            "uploaded_at": "2023-12-31",
            "matchPercentage": 90
        }))
        .unwrap();
        assert_eq!(record.resolved_uploaded_at(), Some("2024-01-01"));

        let snake_only: BackendRecord =
            serde_json::from_value(json!({"uploadedAt": "", "uploaded_at": "2023-12-31"}))
                .unwrap();
        assert_eq!(snake_only.resolved_uploaded_at(), Some("2023-12-31"));
    }
}
