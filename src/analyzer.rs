//! Volume trend analysis over an ordered daily sample series.
//!
//! Pure computation: no I/O, no shared state, safe to call concurrently on
//! independent series. Degenerate inputs (empty, singleton, all-zero) are
//! defined results, never errors; a quiet time window must not crash a
//! reporting run.

use crate::models::{AgeSummary, Sample, VolumeAnalysis};

/// Percentage of `delta` over `baseline` with the zero-baseline convention:
/// a baseline of exactly zero reports a fixed 100% increase instead of an
/// undefined ratio, so downstream formatting always has a number.
fn pct_over(delta: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        delta / baseline * 100.0
    } else {
        100.0
    }
}

/// Computes peak, runner-up, mean, and median comparisons for a series.
///
/// An empty series yields a zeroed result with a `"none"` peak label. A
/// singleton series has no runner-up; the delta is the peak value itself and
/// the percentage is the fixed 100% zero-baseline figure. Ties for the peak
/// value go to the earlier sample (stable sort keeps chronological order
/// among equals).
///
/// `days_window` is carried into the result for presentation and does not
/// affect any computed field.
pub fn analyze(series: &[Sample], days_window: u32) -> VolumeAnalysis {
    if series.is_empty() {
        return VolumeAnalysis {
            window_days: days_window,
            peak: Sample::new("none", 0),
            runner_up: None,
            peak_vs_runner_up_delta: 0,
            peak_vs_runner_up_pct: 0.0,
            mean: 0.0,
            peak_vs_mean_delta: 0.0,
            peak_vs_mean_pct: 0.0,
            median: 0.0,
            peak_vs_median_delta: 0.0,
            peak_vs_median_pct: 0.0,
        };
    }

    let mut by_value: Vec<&Sample> = series.iter().collect();
    by_value.sort_by(|a, b| b.value.cmp(&a.value));

    let peak = by_value[0].clone();
    let runner_up = by_value.get(1).map(|s| (*s).clone());

    let (runner_up_delta, runner_up_pct) = match &runner_up {
        Some(second) => {
            let delta = peak.value - second.value;
            (delta, pct_over(delta as f64, second.value as f64))
        }
        None => (peak.value, 100.0),
    };

    // Mean and median run over the whole series, peak included.
    let values: Vec<u64> = series.iter().map(|s| s.value).collect();
    let mean = values.iter().sum::<u64>() as f64 / values.len() as f64;

    let mut sorted = values;
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    let mean_delta = peak.value as f64 - mean;
    let median_delta = peak.value as f64 - median;

    VolumeAnalysis {
        window_days: days_window,
        peak_vs_mean_delta: mean_delta,
        peak_vs_mean_pct: pct_over(mean_delta, mean),
        peak_vs_median_delta: median_delta,
        peak_vs_median_pct: pct_over(median_delta, median),
        peak,
        runner_up,
        peak_vs_runner_up_delta: runner_up_delta,
        peak_vs_runner_up_pct: runner_up_pct,
        mean,
        median,
    }
}

/// Condenses an ordered age series (seconds) into the current and period-max
/// readings. An empty window reads as zero age.
pub fn summarize_age(series: &[Sample]) -> AgeSummary {
    AgeSummary {
        current_secs: series.last().map_or(0, |s| s.value),
        period_max_secs: series.iter().map(|s| s.value).max().unwrap_or(0),
    }
}
