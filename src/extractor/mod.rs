// file: src/extractor/mod.rs
// description: candidate field extraction module exports
// reference: internal module structure

pub mod cascade;
pub mod email;
pub mod fields;
pub mod job_role;
pub mod lines;
pub mod name;
pub mod patterns;
pub mod phone;

pub use email::extract_email;
pub use fields::{CandidateExtractor, CandidateFields};
pub use job_role::{RoleSources, extract_job_role};
pub use name::extract_name;
pub use phone::{PhoneExtractor, extract_phone};
