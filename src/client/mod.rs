// file: src/client/mod.rs
// description: boundary to the resume screening backend
// reference: internal module structure

pub mod http;

pub use http::HttpResumeSource;

use crate::error::Result;
use crate::models::BackendRecord;
use std::future::Future;

/// Where resume listings come from. The backend owns parsing, scoring and
/// persistence; this crate only reads its records and asks it to delete.
pub trait ResumeSource {
    fn fetch_user_resumes(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<BackendRecord>>> + Send;

    fn delete_resume(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    fn download_file(&self, id: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
