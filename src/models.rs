//! Value types shared by the analyzer, renderer, and report layer.

use serde::{Deserialize, Serialize};

/// One time-labeled datapoint of a metric series.
///
/// `label` is a date (`YYYY-MM-DD`) or timestamp string; `value` is the
/// non-negative reading for that period. Series arrive ordered ascending by
/// time from whatever source produced them and are never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: u64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Comparative volume statistics over a daily series.
///
/// Built fresh per `analyze` call, read-only afterwards. Percentages are raw
/// floats; rounding for display is the report layer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeAnalysis {
    /// Lookback window the series was fetched with, carried through for
    /// report headers. Does not affect any computed field.
    pub window_days: u32,
    pub peak: Sample,
    pub runner_up: Option<Sample>,
    pub peak_vs_runner_up_delta: u64,
    pub peak_vs_runner_up_pct: f64,
    pub mean: f64,
    pub peak_vs_mean_delta: f64,
    pub peak_vs_mean_pct: f64,
    pub median: f64,
    pub peak_vs_median_delta: f64,
    pub peak_vs_median_pct: f64,
}

/// Oldest-message age readings condensed to the figures the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeSummary {
    pub current_secs: u64,
    pub period_max_secs: u64,
}
