// file: src/pipeline/mod.rs
// description: record merge, ranking and dashboard state module exports
// reference: internal module structure

pub mod board;
pub mod collection;
pub mod merge;

pub use board::{BoardState, ReloadTicket, ResumeBoard};
pub use collection::{ResumeCollection, apply_filter, sort_canonical};
pub use merge::{RecordBuilder, build_record};
