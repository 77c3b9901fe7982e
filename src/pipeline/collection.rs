// file: src/pipeline/collection.rs
// description: canonical ranking and job-role filtering over resume records

use crate::models::ResumeRecord;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Stable sort, highest match percentage first. Ties keep input order.
pub fn sort_canonical<R: Borrow<ResumeRecord>>(mut records: Vec<R>) -> Vec<R> {
    records.sort_by(|a, b| {
        let a = <R as Borrow<ResumeRecord>>::borrow(a);
        let b = <R as Borrow<ResumeRecord>>::borrow(b);
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });
    records
}

/// Case-insensitive substring match on the job role. A blank needle
/// returns the canonical records unchanged.
pub fn apply_filter<R: Borrow<ResumeRecord> + Clone>(canonical: &[R], needle: &str) -> Vec<R> {
    if needle.trim().is_empty() {
        return canonical.to_vec();
    }

    let needle = needle.to_lowercase();
    canonical
        .iter()
        .filter(|record| {
            let record = <R as Borrow<ResumeRecord>>::borrow(record);
            record.job_role.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Full ranked set plus the subset currently on display. Both views share
/// the same records.
#[derive(Debug, Clone, Default)]
pub struct ResumeCollection {
    canonical: Vec<Arc<ResumeRecord>>,
    displayed: Vec<Arc<ResumeRecord>>,
    filter: Option<String>,
}

impl ResumeCollection {
    pub fn new(records: Vec<ResumeRecord>) -> Self {
        let canonical: Vec<_> = sort_canonical(records).into_iter().map(Arc::new).collect();
        Self {
            displayed: canonical.clone(),
            canonical,
            filter: None,
        }
    }

    pub fn canonical(&self) -> &[Arc<ResumeRecord>] {
        &self.canonical
    }

    pub fn displayed(&self) -> &[Arc<ResumeRecord>] {
        &self.displayed
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Narrows the displayed records. Returns `false` and leaves the view
    /// as it was when `needle` is blank.
    pub fn filter(&mut self, needle: &str) -> bool {
        if needle.trim().is_empty() {
            return false;
        }
        self.displayed = apply_filter(&self.canonical, needle);
        self.filter = Some(needle.to_string());
        debug!(
            filter = needle,
            shown = self.displayed.len(),
            total = self.canonical.len(),
            "applied job role filter"
        );
        true
    }

    pub fn show_all(&mut self) {
        self.displayed = self.canonical.clone();
        self.filter = None;
    }

    /// Drops the record with `id` from both views.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.canonical.len();
        self.canonical.retain(|record| record.id.as_deref() != Some(id));
        self.displayed.retain(|record| record.id.as_deref() != Some(id));
        self.canonical.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use pretty_assertions::assert_eq;

    fn record(id: &str, role: &str, match_percentage: f64) -> ResumeRecord {
        ResumeRecord {
            id: Some(id.to_string()),
            file_name: format!("{}.pdf", id),
            uploaded_at: None,
            extracted_text: None,
            job_description_text: None,
            ats_score: 0.0,
            match_percentage,
            rating: String::new(),
            candidate_name: Field::Absent,
            candidate_email: Field::Absent,
            candidate_phone: Field::Absent,
            job_role: if role.is_empty() {
                Field::Absent
            } else {
                Field::Derived(role.to_string())
            },
        }
    }

    fn ids<R: Borrow<ResumeRecord>>(records: &[R]) -> Vec<String> {
        records
            .iter()
            .map(|r| {
                let r: &ResumeRecord = r.borrow();
                r.id.clone().unwrap_or_default()
            })
            .collect()
    }

    fn sample() -> Vec<ResumeRecord> {
        vec![
            record("a", "Backend Engineer", 50.0),
            record("b", "Data Analyst", 80.0),
            record("c", "QA Engineer", 50.0),
            record("d", "", 50.0),
            record("e", "Frontend Engineer", 95.0),
        ]
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let sorted = sort_canonical(sample());
        assert_eq!(ids(&sorted), vec!["e", "b", "a", "c", "d"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let canonical = sort_canonical(sample());
        let filtered = apply_filter(&canonical, "ENGINEER");
        assert_eq!(ids(&filtered), vec!["e", "a", "c"]);
    }

    #[test]
    fn test_blank_filter_returns_canonical() {
        let canonical = sort_canonical(sample());
        assert_eq!(apply_filter(&canonical, ""), canonical);
        assert_eq!(apply_filter(&canonical, "   "), canonical);
    }

    #[test]
    fn test_filter_with_no_hits() {
        let canonical = sort_canonical(sample());
        assert!(apply_filter(&canonical, "astronaut").is_empty());
    }

    #[test]
    fn test_collection_filter_and_show_all_share_records() {
        let mut collection = ResumeCollection::new(sample());
        assert!(!collection.is_filtered());

        assert!(collection.filter("analyst"));
        assert_eq!(ids(collection.displayed()), vec!["b"]);
        assert_eq!(collection.active_filter(), Some("analyst"));
        assert!(Arc::ptr_eq(&collection.displayed()[0], &collection.canonical()[1]));

        collection.show_all();
        assert!(!collection.is_filtered());
        assert_eq!(collection.displayed().len(), collection.canonical().len());
        for (shown, canonical) in collection.displayed().iter().zip(collection.canonical()) {
            assert!(Arc::ptr_eq(shown, canonical));
        }
    }

    #[test]
    fn test_blank_filter_keeps_current_view() {
        let mut collection = ResumeCollection::new(sample());
        collection.filter("qa");
        assert!(!collection.filter("  "));
        assert_eq!(ids(collection.displayed()), vec!["c"]);
        assert_eq!(collection.active_filter(), Some("qa"));
    }

    #[test]
    fn test_remove_drops_from_both_views() {
        let mut collection = ResumeCollection::new(sample());
        collection.filter("engineer");

        assert!(collection.remove("a"));
        assert_eq!(ids(collection.canonical()), vec!["e", "b", "c", "d"]);
        assert_eq!(ids(collection.displayed()), vec!["e", "c"]);
        assert!(!collection.remove("missing"));
        assert_eq!(collection.len(), 4);
    }
}
