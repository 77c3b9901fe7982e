// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod backend;
pub mod record;

pub use backend::BackendRecord;
pub use record::{Field, ResumeRecord, coerce_score, format_score};
