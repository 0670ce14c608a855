//! Rows are months, columns are years, column 0 holds the month name.
//!
//! ```text
//!             | 2019 | 2020
//!   Enero     | 1,5  | 2,1
//!   ...       |      |
//!   Diciembre | 2,0  |
//!   Total     | 21,3 | 2,1
//! ```

use bccr_types::{BccrError, Layout};

use super::{Located, MONTHS, SubGrid, find_row};
use crate::calendar::CalendarAnchor;
use crate::grid::RawGrid;
use crate::matcher::AnchorMatcher;

const LAYOUT: Layout = Layout::MonthRowYearCol;

pub(super) fn locate(grid: &RawGrid, matcher: &dyn AnchorMatcher) -> Result<Located, BccrError> {
    let header_row = find_row(grid, 0, |c| matcher.is_first_month(c)).ok_or_else(|| {
        BccrError::unrecognized_layout(LAYOUT, "first-month label not found in column 0")
    })?;
    if header_row == 0 {
        return Err(BccrError::unrecognized_layout(
            LAYOUT,
            "first-month label has no year header above it",
        ));
    }
    let year = grid
        .cell(header_row - 1, 1)
        .and_then(|c| matcher.parse_year(c))
        .ok_or_else(|| {
            BccrError::unrecognized_layout(
                LAYOUT,
                format!("no year label above the first month at row {header_row}"),
            )
        })?;
    let anchor = CalendarAnchor::monthly(year, 1)?;
    Ok(Located { header_row, anchor })
}

pub(super) fn extract(
    grid: &RawGrid,
    located: Located,
    matcher: &dyn AnchorMatcher,
) -> Result<SubGrid, BccrError> {
    let h = located.header_row;

    let month_rows: Vec<usize> = (h..grid.n_rows())
        .filter(|&r| {
            let label = grid.cell(r, 0).unwrap_or_default().trim();
            !label.is_empty() && !matcher.is_summary(label)
        })
        .take(MONTHS)
        .collect();
    if month_rows.len() < MONTHS {
        return Err(BccrError::unrecognized_layout(
            LAYOUT,
            format!("expected {MONTHS} month rows, found {}", month_rows.len()),
        ));
    }

    let mut year_cols = Vec::new();
    let mut row_labels = Vec::new();
    let mut expected = located.anchor.year();
    for c in 1..grid.n_cols() {
        let label = grid.cell(h - 1, c).unwrap_or_default();
        let Some(year) = matcher.parse_year(label) else {
            break;
        };
        if year != expected {
            return Err(BccrError::unrecognized_layout(
                LAYOUT,
                format!("year {year} at column {c} does not follow {}", expected - 1),
            ));
        }
        expected = expected.checked_add(1).ok_or_else(|| {
            BccrError::unrecognized_layout(
                LAYOUT,
                format!("year {year} at column {c} is out of range"),
            )
        })?;
        year_cols.push(c);
        row_labels.push(label.trim().to_string());
    }

    // Transposed: one row per year column, one cell per month.
    let rows = year_cols
        .iter()
        .map(|&c| {
            month_rows
                .iter()
                .map(|&r| grid.cell(r, c).unwrap_or_default().to_string())
                .collect()
        })
        .collect();

    Ok(SubGrid {
        layout: LAYOUT,
        anchor: located.anchor,
        row_labels,
        column_labels: month_rows
            .iter()
            .map(|&r| grid.cell(r, 0).unwrap_or_default().trim().to_string())
            .collect(),
        rows,
    })
}
