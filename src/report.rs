//! Human-readable report formatting.
//!
//! This layer only formats figures that were already computed; it never
//! re-derives a statistic. Percentages pick up their one-decimal rounding
//! here, means and medians print truncated to whole messages, and deltas
//! carry a `+` prefix, matching the console report format.

use crate::common::format::{format_age, group_thousands};
use crate::models::{AgeSummary, Sample, VolumeAnalysis};

/// Templated volume analysis summary, one string per printed line.
pub fn volume_report(analysis: &VolumeAnalysis) -> Vec<String> {
    let mut lines = vec![
        format!("Volume Analysis (last {} days):", analysis.window_days),
        String::new(),
        "• Peak Volume Day:".to_string(),
        format!("  - Date: {}", analysis.peak.label),
        format!(
            "  - Volume: {} messages",
            group_thousands(analysis.peak.value)
        ),
    ];

    if let Some(runner_up) = &analysis.runner_up {
        lines.push(String::new());
        lines.push("• Comparison with Second Highest:".to_string());
        lines.push(format!("  - Second Highest Day: {}", runner_up.label));
        lines.push(format!(
            "  - Second Highest Volume: {} messages",
            group_thousands(runner_up.value)
        ));
        lines.push(format!(
            "  - Volume Difference: +{} messages",
            group_thousands(analysis.peak_vs_runner_up_delta)
        ));
        lines.push(format!(
            "  - Percentage Increase: {:.1}%",
            analysis.peak_vs_runner_up_pct
        ));
    }

    lines.push(String::new());
    lines.push("• Comparison with Mean:".to_string());
    lines.push(format!(
        "  - Mean Volume: {} messages",
        group_thousands(analysis.mean as u64)
    ));
    lines.push(format!(
        "  - Difference from Mean: +{} messages",
        group_thousands(analysis.peak_vs_mean_delta as u64)
    ));
    lines.push(format!(
        "  - Percentage Above Mean: {:.1}%",
        analysis.peak_vs_mean_pct
    ));

    lines.push(String::new());
    lines.push("• Comparison with Median:".to_string());
    lines.push(format!(
        "  - Median Volume: {} messages",
        group_thousands(analysis.median as u64)
    ));
    lines.push(format!(
        "  - Difference from Median: +{} messages",
        group_thousands(analysis.peak_vs_median_delta as u64)
    ));
    lines.push(format!(
        "  - Percentage Above Median: {:.1}%",
        analysis.peak_vs_median_pct
    ));

    lines
}

/// Totals plus the per-period breakdown for a metric series.
pub fn series_summary(name: Option<&str>, series: &[Sample]) -> Vec<String> {
    let total: u64 = series.iter().map(|s| s.value).sum();

    let mut lines = Vec::new();
    if let Some(name) = name {
        lines.push(format!("Queue: {name}"));
        lines.push(String::new());
    }
    lines.push(format!(
        "Total messages received: {}",
        group_thousands(total)
    ));
    lines.push(String::new());
    lines.push("Daily breakdown:".to_string());
    for sample in series {
        lines.push(format!(
            "{}: {} messages",
            sample.label,
            group_thousands(sample.value)
        ));
    }

    lines
}

/// Oldest-message age summary lines.
pub fn age_report(summary: &AgeSummary) -> Vec<String> {
    vec![
        "Summary:".to_string(),
        format!(
            "Current oldest message age: {}",
            format_age(summary.current_secs)
        ),
        format!(
            "Maximum age in period: {}",
            format_age(summary.period_max_secs)
        ),
    ]
}
