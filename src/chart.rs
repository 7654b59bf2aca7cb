//! Text-mode bar chart rendering.
//!
//! Turns an ordered metric series into fixed-width lines: `height` bar rows
//! with y-axis ticks, then the x-axis rule, shortened labels, and a row of
//! thousands-separated values. Single pass, no state, deterministic.

use thiserror::Error;

use crate::common::format::{group_thousands, short_label};
use crate::models::Sample;

const BAR: char = '█';
const TICK_TOP: &str = "┬";
const TICK_MID: &str = "┤";
const TICK_BOTTOM: &str = "┴";
const AXIS: &str = "│";
const CORNER: &str = "└";
const RULE: &str = "─";

#[derive(Debug, Error)]
pub enum ChartError {
    /// A geometry parameter was zero. Signals a configuration error to the
    /// caller; data problems never raise.
    #[error("chart {parameter} must be positive, got 0")]
    InvalidDimension { parameter: &'static str },
}

/// Chart geometry.
///
/// `axis_width` is a minimum: the y-axis column widens on its own when the
/// largest formatted tick value plus its glyph would not fit, so tick labels
/// never truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Bar area height in rows.
    pub height: usize,
    /// Characters allocated to each sample column.
    pub column_width: usize,
    /// Minimum width of the y-axis label column.
    pub axis_width: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 8,
            column_width: 8,
            axis_width: 10,
        }
    }
}

/// Renders `series` as a scaled bar chart, one `String` per output row.
///
/// An empty series renders as no lines at all; a non-empty series always
/// produces exactly `height + 3` lines. An all-zero series falls back to a
/// scale max of 1 and draws no bars, while a nonzero value too small for the
/// resolution is forced to a single visible cell.
pub fn render(series: &[Sample], opts: &ChartOptions) -> Result<Vec<String>, ChartError> {
    if opts.height == 0 {
        return Err(ChartError::InvalidDimension {
            parameter: "height",
        });
    }
    if opts.column_width == 0 {
        return Err(ChartError::InvalidDimension {
            parameter: "column_width",
        });
    }
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let height = opts.height;
    let column_width = opts.column_width;

    // A zero max would make the scale factor undefined; substitute 1 so an
    // all-quiet window still renders a frame.
    let max_value = series.iter().map(|s| s.value).max().unwrap_or(0).max(1);
    let scale = height as f64 / max_value as f64;

    let bar_heights: Vec<usize> = series
        .iter()
        .map(|s| {
            let cells = (s.value as f64 * scale).floor() as usize;
            if s.value > 0 && cells == 0 { 1 } else { cells }
        })
        .collect();

    // Widest tick is the top row: value, space, glyph, plus one pad column.
    let axis_width = opts.axis_width.max(group_thousands(max_value).len() + 3);

    let mut lines = Vec::with_capacity(height + 3);

    for row in 0..height {
        // Tick selection runs on the row index counted from the bottom: both
        // ends carry their end-glyph, even interior rows a value, odd rows
        // just the axis line. The parity rule is what thins label clutter on
        // short charts.
        let from_bottom = height - row - 1;
        let tick = if from_bottom == height - 1 {
            format!("{} {TICK_TOP}", group_thousands(max_value))
        } else if from_bottom == 0 {
            format!("0 {TICK_BOTTOM}")
        } else if from_bottom % 2 == 0 {
            let value = (from_bottom as f64 / height as f64 * max_value as f64).round() as u64;
            format!("{} {TICK_MID}", group_thousands(value))
        } else {
            AXIS.to_string()
        };

        let mut line = pad_left(&tick, axis_width);
        for cells in &bar_heights {
            line.push(if row >= height - cells { BAR } else { ' ' });
            line.push_str(&" ".repeat(column_width - 1));
        }
        lines.push(line);
    }

    let mut rule = " ".repeat(axis_width - 1);
    rule.push_str(CORNER);
    rule.push_str(&RULE.repeat(series.len() * column_width));
    lines.push(rule);

    let mut labels = " ".repeat(axis_width);
    for sample in series {
        labels.push_str(&pad_right(&short_label(&sample.label), column_width));
    }
    lines.push(labels);

    let mut values = " ".repeat(axis_width);
    for sample in series {
        values.push_str(&pad_right(&group_thousands(sample.value), column_width));
    }
    lines.push(values);

    Ok(lines)
}

/// Right-justifies `text` in a `width`-character field. Counts chars rather
/// than bytes so the box-drawing glyphs pad correctly.
fn pad_left(text: &str, width: usize) -> String {
    let mut out = " ".repeat(width.saturating_sub(text.chars().count()));
    out.push_str(text);
    out
}

fn pad_right(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(text.chars().count())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, u64)]) -> Vec<Sample> {
        points.iter().map(|(l, v)| Sample::new(*l, *v)).collect()
    }

    fn opts(height: usize, column_width: usize) -> ChartOptions {
        ChartOptions {
            height,
            column_width,
            ..ChartOptions::default()
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let data = series(&[("d1", 1)]);
        assert!(matches!(
            render(&data, &opts(0, 8)),
            Err(ChartError::InvalidDimension { parameter: "height" })
        ));
        assert!(matches!(
            render(&data, &opts(8, 0)),
            Err(ChartError::InvalidDimension {
                parameter: "column_width"
            })
        ));
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert_eq!(render(&[], &ChartOptions::default()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn two_column_layout_is_exact() {
        let lines = render(&series(&[("d1", 0), ("d2", 4)]), &opts(4, 6)).unwrap();
        assert_eq!(
            lines,
            vec![
                "       4 ┬      █     ",
                "       2 ┤      █     ",
                "         │      █     ",
                "       0 ┴      █     ",
                "         └────────────",
                "          d1    d2    ",
                "          0     4     ",
            ]
        );
    }

    #[test]
    fn all_zero_series_substitutes_scale_max_and_draws_no_bars() {
        let lines = render(&series(&[("d1", 0), ("d2", 0)]), &ChartOptions::default()).unwrap();
        assert!(lines[0].starts_with("       1 ┬"));
        assert!(!lines.iter().any(|l| l.contains(BAR)));
    }

    #[test]
    fn small_nonzero_value_keeps_a_visible_bar() {
        let lines = render(&series(&[("d1", 100), ("d2", 1)]), &opts(4, 6)).unwrap();
        // 1 * 4/100 floors to 0; forced to one cell on the bottom row.
        let bottom = &lines[3];
        assert_eq!(bottom.matches(BAR).count(), 2);
        assert!(!lines[2].chars().nth(16).unwrap().eq(&BAR));
    }

    #[test]
    fn alternating_ticks_follow_row_parity() {
        let lines = render(&series(&[("d1", 8)]), &opts(8, 8)).unwrap();
        assert!(lines[0].starts_with("       8 ┬"));
        assert!(lines[1].starts_with("       6 ┤"));
        assert!(lines[2].starts_with("         │"));
        assert!(lines[3].starts_with("       4 ┤"));
        assert!(lines[4].starts_with("         │"));
        assert!(lines[5].starts_with("       2 ┤"));
        assert!(lines[6].starts_with("         │"));
        assert!(lines[7].starts_with("       0 ┴"));
    }

    #[test]
    fn interior_tick_values_round() {
        // 3/8 of 1000 is 375; 5/8 is 625 -- only even rows get values, so
        // check 6/8 (750) and 2/8 (250) and that they round, not truncate.
        let lines = render(&series(&[("d1", 999)]), &opts(8, 8)).unwrap();
        assert!(lines[0].starts_with("     999 ┬"));
        // 6/8 * 999 = 749.25 -> 749, 4/8 * 999 = 499.5 -> 500 (round half up)
        assert!(lines[1].starts_with("     749 ┤"));
        assert!(lines[3].starts_with("     500 ┤"));
    }

    #[test]
    fn axis_widens_for_wide_tick_labels() {
        let lines = render(&series(&[("d1", 12_345_678)]), &ChartOptions::default()).unwrap();
        // "12,345,678" is 10 chars; 10 + 3 beats the configured minimum.
        assert!(lines[0].starts_with(" 12,345,678 ┬"));
        let axis = "12,345,678".len() + 3;
        assert_eq!(lines[lines.len() - 3].chars().take(axis).collect::<String>(), format!("{}└", " ".repeat(axis - 1)));
        for line in &lines {
            assert!(line.chars().count() >= axis);
        }
    }

    #[test]
    fn date_labels_drop_the_year() {
        let lines = render(&series(&[("2024-06-01", 5)]), &ChartOptions::default()).unwrap();
        let label_row = &lines[lines.len() - 2];
        assert!(label_row.contains("06-01"));
        assert!(!label_row.contains("2024"));
    }

    #[test]
    fn values_row_groups_thousands() {
        let lines = render(&series(&[("d1", 1_500)]), &ChartOptions::default()).unwrap();
        assert!(lines[lines.len() - 1].contains("1,500"));
    }

    #[test]
    fn line_count_is_height_plus_three() {
        for height in [1, 4, 8, 13] {
            let lines = render(&series(&[("d1", 3), ("d2", 9)]), &opts(height, 8)).unwrap();
            assert_eq!(lines.len(), height + 3);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let data = series(&[("2024-06-01", 100), ("2024-06-02", 300), ("2024-06-03", 150)]);
        let opts = ChartOptions::default();
        assert_eq!(render(&data, &opts).unwrap(), render(&data, &opts).unwrap());
    }
}
