// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use client::{HttpResumeSource, ResumeSource};
pub use config::{BackendConfig, Config, ExportConfig, ExtractionConfig, PhoneFallback};
pub use error::{Result, ReviewError};
pub use exporter::{ExportManifest, JsonExporter};
pub use extractor::{
    CandidateExtractor, CandidateFields, extract_email, extract_job_role, extract_name,
    extract_phone,
};
pub use models::{BackendRecord, Field, ResumeRecord};
pub use pipeline::{
    BoardState, RecordBuilder, ResumeBoard, ResumeCollection, apply_filter, build_record,
    sort_canonical,
};
pub use utils::Validator;
