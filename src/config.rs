use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::chart::ChartOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("chart {parameter} in the config file must be positive")]
    InvalidChart { parameter: &'static str },
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_column_width")]
    pub column_width: usize,
    #[serde(default = "default_axis_width")]
    pub axis_width: usize,
}

fn default_height() -> usize {
    8
}

fn default_column_width() -> usize {
    8
}

fn default_axis_width() -> usize {
    10
}

fn default_days_window() -> u32 {
    15
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            column_width: default_column_width(),
            axis_width: default_axis_width(),
        }
    }
}

impl ChartConfig {
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            height: self.height,
            column_width: self.column_width,
            axis_width: self.axis_width,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default)]
    pub chart: ChartConfig,

    /// Default lookback window in days when a command does not pass `--days`.
    #[serde(default = "default_days_window")]
    pub days_window: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            days_window: default_days_window(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from the given YAML file. A missing file falls
    /// back to built-in defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: ReportConfig =
            serde_yaml::from_str(&yaml).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        // Catch bad geometry at startup instead of at render time.
        if config.chart.height == 0 {
            return Err(ConfigError::InvalidChart {
                parameter: "height",
            });
        }
        if config.chart.column_width == 0 {
            return Err(ConfigError::InvalidChart {
                parameter: "column_width",
            });
        }

        Ok(config)
    }
}
