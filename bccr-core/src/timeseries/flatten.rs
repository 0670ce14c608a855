use bccr_types::{BccrError, Layout};

use crate::layout::SubGrid;
use crate::series::FlatSeries;

/// Parse a published numeric cell.
///
/// The publisher writes a decimal comma and may group digits with spaces or
/// non-breaking spaces: `"1 234,5"` is `1234.5`. Empty, non-numeric and
/// non-finite cells are missing.
#[must_use]
pub fn parse_cell(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Walk a month-layout sub-grid in row-major order into one series.
///
/// The `k`-th cell is dated at the `k`-th period after the anchor, so the
/// output has exactly `sub.cell_count()` points.
///
/// # Errors
/// Returns `InvalidRequest` for an indicator sub-grid (use
/// [`flatten_columns`]) or when the calendar overflows.
pub fn flatten(sub: &SubGrid) -> Result<FlatSeries, BccrError> {
    if sub.layout == Layout::IndicatorRowYearCol {
        return Err(BccrError::invalid_request(
            "indicator grids hold one series per column; flatten them by column",
        ));
    }
    let values = sub.rows.iter().flatten().map(|c| parse_cell(c));
    FlatSeries::from_anchor(sub.anchor, values)
}

/// One series per column, rows being consecutive periods from the anchor.
///
/// # Errors
/// Returns `InvalidRequest` when the calendar overflows.
pub fn flatten_columns(sub: &SubGrid) -> Result<Vec<(String, FlatSeries)>, BccrError> {
    sub.column_labels
        .iter()
        .enumerate()
        .map(|(j, label)| {
            let values = sub
                .rows
                .iter()
                .map(|r| r.get(j).and_then(|c| parse_cell(c)));
            FlatSeries::from_anchor(sub.anchor, values).map(|s| (label.clone(), s))
        })
        .collect()
}
