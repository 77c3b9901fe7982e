// file: src/client/http.rs
// description: reqwest client for the resume screening REST api
// reference: https://docs.rs/reqwest

use crate::client::ResumeSource;
use crate::config::BackendConfig;
use crate::error::{ReviewError, Result};
use crate::models::BackendRecord;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct HttpResumeSource {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpResumeSource {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ReviewError::Config(format!("Invalid backend.base_url {}: {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().filter(|token| !token.is_empty()),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ReviewError::Config(format!("backend.base_url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReviewError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

impl ResumeSource for HttpResumeSource {
    async fn fetch_user_resumes(&self, user_id: &str) -> Result<Vec<BackendRecord>> {
        let url = self.endpoint(&["resumes", "user", user_id])?;
        debug!("Fetching resumes from {}", url);

        let body: Value = self.send(self.client.get(url)).await?.json().await?;
        let records = parse_listing(body);

        info!("Fetched {} resumes for user {}", records.len(), user_id);
        Ok(records)
    }

    async fn delete_resume(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&["resumes", id])?;
        self.send(self.client.delete(url)).await?;
        info!("Backend deleted resume {}", id);
        Ok(())
    }

    async fn download_file(&self, id: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(&["resumes", id, "file"])?;
        let bytes = self.send(self.client.get(url)).await?.bytes().await?;
        debug!("Downloaded {} bytes for resume {}", bytes.len(), id);
        Ok(bytes.to_vec())
    }
}

/// A listing that is not a JSON array is treated as empty; entries that are
/// not objects are skipped.
pub fn parse_listing(body: Value) -> Vec<BackendRecord> {
    let Value::Array(entries) = body else {
        warn!("Resume listing was not an array, treating as empty");
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<BackendRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed resume entry: {}", e);
                None
            }
        })
        .collect()
}
