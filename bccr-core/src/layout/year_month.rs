//! Rows are years, columns are months, column 0 holds the year label.
//!
//! ```text
//!          | Enero | Febrero | ... | Diciembre | Promedio
//!   2019   |  1,5  |   1,6   | ... |    2,0    |   1,8
//!   2020   |  2,1  |         | ... |           |   2,1
//! ```

use bccr_types::{BccrError, Layout};

use super::{Located, MONTHS, SubGrid, find_row};
use crate::calendar::CalendarAnchor;
use crate::grid::RawGrid;
use crate::matcher::AnchorMatcher;

const LAYOUT: Layout = Layout::YearRowMonthCol;

pub(super) fn locate(grid: &RawGrid, matcher: &dyn AnchorMatcher) -> Result<Located, BccrError> {
    let header_row = find_row(grid, 1, |c| matcher.is_first_month(c)).ok_or_else(|| {
        BccrError::unrecognized_layout(LAYOUT, "first-month header not found in column 1")
    })?;
    let year = grid
        .cell(header_row + 1, 0)
        .and_then(|c| matcher.parse_year(c))
        .ok_or_else(|| {
            BccrError::unrecognized_layout(
                LAYOUT,
                format!("no year label below the month header at row {header_row}"),
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
    let header = grid.row(h).unwrap_or_default();

    let month_cols: Vec<usize> = (1..grid.n_cols())
        .filter(|&c| {
            let label = header[c].trim();
            !label.is_empty() && !matcher.is_summary(label)
        })
        .take(MONTHS)
        .collect();
    if month_cols.len() < MONTHS {
        return Err(BccrError::unrecognized_layout(
            LAYOUT,
            format!("expected {MONTHS} month columns, found {}", month_cols.len()),
        ));
    }

    let mut row_labels = Vec::new();
    let mut rows = Vec::new();
    let mut expected = located.anchor.year();
    for r in (h + 1)..grid.n_rows() {
        let label = grid.cell(r, 0).unwrap_or_default();
        let Some(year) = matcher.parse_year(label) else {
            break;
        };
        if year != expected {
            return Err(BccrError::unrecognized_layout(
                LAYOUT,
                format!("year {year} at row {r} does not follow {}", expected - 1),
            ));
        }
        expected = expected.checked_add(1).ok_or_else(|| {
            BccrError::unrecognized_layout(
                LAYOUT,
                format!("year {year} at row {r} is out of range"),
            )
        })?;
        row_labels.push(label.trim().to_string());
        rows.push(
            month_cols
                .iter()
                .map(|&c| grid.cell(r, c).unwrap_or_default().to_string())
                .collect(),
        );
    }

    Ok(SubGrid {
        layout: LAYOUT,
        anchor: located.anchor,
        row_labels,
        column_labels: month_cols.iter().map(|&c| header[c].trim().to_string()).collect(),
        rows,
    })
}
