// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ReviewError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

/// Tunables for the heuristic extractors. Defaults reproduce the
/// dashboard's historical behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines searched for a `Name:` label.
    pub name_scan_lines: usize,
    /// Lines searched for plain-text and all-caps name headers.
    pub header_lines: usize,
    /// Job description lines searched for a `Role:` label.
    pub role_label_lines: usize,
    pub role_max_chars: usize,
    pub phone_fallback: PhoneFallback,
}

/// What the phone extractor returns when no candidate has a plausible digit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFallback {
    /// First raw pattern match, even if implausible.
    #[default]
    FirstMatch,
    Empty,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub pretty: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 12,
            header_lines: 6,
            role_label_lines: 6,
            role_max_chars: 80,
            phone_fallback: PhoneFallback::FirstMatch,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ReviewError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RESREVIEW")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ReviewError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ReviewError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8080/api".to_string(),
                token: None,
                timeout_secs: 30,
            },
            extraction: ExtractionConfig::default(),
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                pretty: true,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = &self.backend.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ReviewError::Config(format!(
                "backend.base_url must be an http(s) URL, got {}",
                base_url
            )));
        }

        if self.backend.timeout_secs == 0 {
            return Err(ReviewError::Config(
                "backend.timeout_secs must be greater than 0".to_string(),
            ));
        }

        let extraction = &self.extraction;
        if extraction.name_scan_lines == 0
            || extraction.header_lines == 0
            || extraction.role_label_lines == 0
        {
            return Err(ReviewError::Config(
                "extraction line limits must be greater than 0".to_string(),
            ));
        }

        if extraction.role_max_chars == 0 {
            return Err(ReviewError::Config(
                "extraction.role_max_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
