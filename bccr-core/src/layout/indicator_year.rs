//! Rows are named indicators, columns are years.
//!
//! ```text
//!                       | 2019  | 2020
//!   Producción          |       |
//!   Agricultura         | 4,2   | 4,1
//!   Industria           | 21,0  | 20,5
//! ```
//!
//! The anchor is the first cell of column 1 matching the year pattern. Rows
//! without any numeric value (section headings) are dropped.

use bccr_types::{BccrError, Layout};

use super::{Located, SubGrid};
use crate::calendar::CalendarAnchor;
use crate::grid::RawGrid;
use crate::matcher::AnchorMatcher;
use crate::timeseries::flatten::parse_cell;

const LAYOUT: Layout = Layout::IndicatorRowYearCol;

pub(super) fn locate(grid: &RawGrid, matcher: &dyn AnchorMatcher) -> Result<Located, BccrError> {
    let (header_row, year) = grid
        .column(1)
        .enumerate()
        .find_map(|(r, c)| matcher.year_of(c).map(|y| (r, y)))
        .ok_or_else(|| {
            BccrError::unrecognized_layout(LAYOUT, "no year header found in column 1")
        })?;
    Ok(Located {
        header_row,
        anchor: CalendarAnchor::annual(year),
    })
}

pub(super) fn extract(
    grid: &RawGrid,
    located: Located,
    matcher: &dyn AnchorMatcher,
) -> Result<SubGrid, BccrError> {
    let h = located.header_row;

    let mut year_cols = Vec::new();
    let mut row_labels = Vec::new();
    let mut expected = located.anchor.year();
    for c in 1..grid.n_cols() {
        let label = grid.cell(h, c).unwrap_or_default();
        let Some(year) = matcher.year_of(label) else {
            break;
        };
        if year != expected {
            return Err(BccrError::unrecognized_layout(
                LAYOUT,
                format!("year {year} at column {c} does not follow {}", expected - 1),
            ));
        }
        expected += 1;
        year_cols.push(c);
        row_labels.push(label.trim().to_string());
    }

    let indicator_rows: Vec<usize> = ((h + 1)..grid.n_rows())
        .filter(|&r| {
            year_cols
                .iter()
                .any(|&c| grid.cell(r, c).and_then(parse_cell).is_some())
        })
        .collect();

    let rows = year_cols
        .iter()
        .map(|&c| {
            indicator_rows
                .iter()
                .map(|&r| grid.cell(r, c).unwrap_or_default().to_string())
                .collect()
        })
        .collect();

    Ok(SubGrid {
        layout: LAYOUT,
        anchor: located.anchor,
        row_labels,
        column_labels: indicator_rows
            .iter()
            .map(|&r| grid.cell(r, 0).unwrap_or_default().trim().to_string())
            .collect(),
        rows,
    })
}
