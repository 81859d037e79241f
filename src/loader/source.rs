use anyhow::{Context, Result};
use log::{error, info};
use std::fmt;
use std::path::PathBuf;

use crate::config::settings::SourceSettings;
use crate::domain::RawPlayerRecord;
use crate::errors::{load_context, with_load_context, with_parse_context};
use crate::http::SourceClient;

/// Where the player document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSource {
    File(PathBuf),
    Url(String),
}

impl PlayerSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            PlayerSource::Url(location.to_string())
        } else {
            PlayerSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for PlayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSource::File(path) => write!(f, "{}", path.display()),
            PlayerSource::Url(url) => f.write_str(url),
        }
    }
}

/// Result of the single load attempt
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<RawPlayerRecord>),
    Failed,
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Fetches and decodes the raw player document
pub struct Loader {
    source: PlayerSource,
    settings: SourceSettings,
}

impl Loader {
    pub fn new(settings: &SourceSettings) -> Self {
        Self {
            source: PlayerSource::parse(&settings.location),
            settings: settings.clone(),
        }
    }

    pub fn source(&self) -> &PlayerSource {
        &self.source
    }

    /// Make one attempt at loading the document. Failures are logged and
    /// reported as [`LoadOutcome::Failed`], never returned as errors.
    pub async fn load_source(&self) -> LoadOutcome {
        match self.fetch_records().await {
            Ok(records) => {
                info!("Loaded {} players from {}", records.len(), self.source);
                LoadOutcome::Loaded(records)
            }
            Err(e) => {
                error!("{:#}", e);
                LoadOutcome::Failed
            }
        }
    }

    async fn fetch_records(&self) -> Result<Vec<RawPlayerRecord>> {
        let text = self.read_document().await?;
        parse_records(&text).with_context(|| load_context(&self.source.to_string()))
    }

    async fn read_document(&self) -> Result<String> {
        match &self.source {
            PlayerSource::File(path) => {
                with_load_context(tokio::fs::read_to_string(path).await, &self.source.to_string())
            }
            PlayerSource::Url(url) => {
                let client = SourceClient::new(self.settings.user_agent, self.settings.timeout_secs)?;
                client.get_text(url).await.with_context(|| load_context(url))
            }
        }
    }
}

pub fn parse_records(text: &str) -> Result<Vec<RawPlayerRecord>> {
    with_parse_context(serde_json::from_str(text), "player document")
}
