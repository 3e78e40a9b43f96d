// File: ./src/source.rs
// Fetch collaborators delivering raw flag-day rows.
use crate::model::RawRow;
use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;

/// Something that can deliver the scraped rows.
///
/// Any `Err` is treated as a generic fetch failure by the cache; network
/// timeouts and HTML extraction problems belong to the implementor.
pub trait RowSource: Send + Sync {
    fn fetch_raw_rows(&self) -> impl Future<Output = Result<Vec<RawRow>>> + Send;
}

/// Reads rows from a JSON array on disk, e.g. the output of an external scraper.
#[derive(Debug, Clone)]
pub struct JsonRowSource {
    pub path: PathBuf,
}

impl JsonRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for JsonRowSource {
    async fn fetch_raw_rows(&self) -> Result<Vec<RawRow>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read rows file: {:?}", self.path))?;
        let rows: Vec<RawRow> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse rows file: {:?}", self.path))?;
        log::debug!("Loaded {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }
}
