// file: src/exporter/json.rs
// description: json export of the ranked resume table

use crate::error::{ReviewError, Result};
use crate::models::ResumeRecord;
use chrono::Utc;
use serde::Serialize;
use std::borrow::Borrow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const RECORDS_FILE: &str = "resumes.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_records: usize,
    pub filter: Option<String>,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ReviewError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir, pretty })
    }

    /// Writes `records` in display order, then a manifest describing them.
    pub fn export<R: Borrow<ResumeRecord>>(
        &self,
        records: &[R],
        filter: Option<&str>,
    ) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let rows: Vec<&ResumeRecord> = records
            .iter()
            .map(<R as Borrow<ResumeRecord>>::borrow)
            .collect();
        self.write_json(RECORDS_FILE, &rows)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_records: rows.len(),
            filter: filter.map(str::to_string),
            files: vec![RECORDS_FILE.to_string()],
        };
        self.write_json(MANIFEST_FILE, &manifest)?;

        info!(
            "Export complete: {} records exported",
            manifest.total_records
        );
        Ok(manifest)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        let path = self.output_dir.join(name);
        fs::write(&path, json).map_err(|source| ReviewError::FileOperation { path, source })
    }
}
