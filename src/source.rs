//! Series source boundary.
//!
//! The analyzer and renderer consume an ordered `{label, value}` series; this
//! module defines the contract for whatever supplies one, plus a file-backed
//! implementation over JSON metric exports. Ordering is the source's
//! responsibility and the core assumes it.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::models::Sample;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read metrics export {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse metrics export {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Supplies an ordered-by-time sample series for a lookback window.
pub trait SeriesSource {
    /// Returns the trailing `days` samples of the series, oldest first.
    /// `days == 0` means the whole series.
    fn fetch(&self, days: u32) -> Result<Vec<Sample>, SourceError>;
}

/// Reads a JSON array of `{"label": …, "value": …}` datapoints exported from
/// the metrics backend.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeriesSource for JsonFileSource {
    fn fetch(&self, days: u32) -> Result<Vec<Sample>, SourceError> {
        let path = self.path.display().to_string();
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        let mut series: Vec<Sample> =
            serde_json::from_str(&text).map_err(|source| SourceError::Parse { path, source })?;

        if days > 0 && series.len() > days as usize {
            series.drain(..series.len() - days as usize);
        }

        debug!(
            "Loaded {} samples from {}",
            series.len(),
            self.path.display()
        );
        Ok(series)
    }
}
