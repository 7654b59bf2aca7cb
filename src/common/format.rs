//! Shared formatting helpers for tick labels, value rows, and reports.

use chrono::NaiveDate;

/// Formats an integer with thousands separators: 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an age in seconds as a compact `1d 2h 3m` string.
/// Leading units are omitted when zero; sub-minute ages read as `0m`.
pub fn format_age(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Shortens a `YYYY-MM-DD` label to `MM-DD` for the x-axis.
/// Labels that are not dates pass through untouched.
pub fn short_label(label: &str) -> String {
    match NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        Ok(date) => date.format("%m-%d").to_string(),
        Err(_) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_age_by_magnitude() {
        assert_eq!(format_age(0), "0m");
        assert_eq!(format_age(59), "0m");
        assert_eq!(format_age(3_660), "1h 1m");
        assert_eq!(format_age(86_400 + 3_600 + 60), "1d 1h 1m");
    }

    #[test]
    fn shortens_date_labels_only() {
        assert_eq!(short_label("2024-06-01"), "06-01");
        assert_eq!(short_label("d1"), "d1");
        assert_eq!(short_label("not-a-date"), "not-a-date");
    }
}
