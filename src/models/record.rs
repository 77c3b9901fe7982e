// file: src/models/record.rs
// description: display-ready resume record merging backend and derived fields

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Where a candidate field's value came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field {
    /// Supplied by the backend; never replaced by a derived value.
    Authoritative(String),
    /// Recovered locally from the record's text.
    Derived(String),
    #[default]
    Absent,
}

impl Field {
    /// A non-empty backend value wins; otherwise `derive` is consulted.
    pub fn resolve<F>(authoritative: Option<&str>, derive: F) -> Self
    where
        F: FnOnce() -> String,
    {
        match authoritative {
            Some(value) if !value.is_empty() => Field::Authoritative(value.to_string()),
            _ => {
                let derived = derive();
                if derived.is_empty() {
                    Field::Absent
                } else {
                    Field::Derived(derived)
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Field::Authoritative(value) | Field::Derived(value) => value,
            Field::Absent => "",
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, Field::Authoritative(_))
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Field::Derived(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Field::Absent => placeholder,
            _ => self.as_str(),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Option<String>,
    pub file_name: String,
    pub uploaded_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description_text: Option<String>,
    pub ats_score: f64,
    pub match_percentage: f64,
    pub rating: String,
    pub candidate_name: Field,
    pub candidate_email: Field,
    pub candidate_phone: Field,
    pub job_role: Field,
}

impl ResumeRecord {
    pub fn display_name(&self) -> &str {
        self.candidate_name.or("Unknown")
    }

    pub fn display_rating(&self) -> &str {
        if self.rating.is_empty() {
            "-"
        } else {
            &self.rating
        }
    }
}

/// Numbers pass through, numeric strings are parsed, anything else is 0.
/// Zero here is a display default, not a real score.
pub fn coerce_score(raw: Option<&Value>) -> f64 {
    let score = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    score.filter(|value| value.is_finite()).unwrap_or(0.0)
}

pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}
