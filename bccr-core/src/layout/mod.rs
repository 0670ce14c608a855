//! Grid layout adapters.
//!
//! The publisher uses exactly three table orientations, modelled by the closed
//! [`Layout`] enum. Each variant implements the same two steps:
//!
//! 1. *locate the anchor*: find the header token that pins the first numeric
//!    cell to an absolute calendar period;
//! 2. *extract the sub-grid*: slice away label rows/columns and orient the
//!    remaining cells so rows are consecutive time spans.
//!
//! A missing anchor is always an `UnrecognizedLayout` error; nothing is guessed.

mod indicator_year;
mod month_year;
mod year_month;

use bccr_types::{BccrError, Layout};

use crate::calendar::CalendarAnchor;
use crate::grid::RawGrid;
use crate::matcher::AnchorMatcher;

/// Position of the header row and the calendar anchor it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// Grid row holding the anchor token.
    pub header_row: usize,
    /// First period of the first numeric cell.
    pub anchor: CalendarAnchor,
}

/// Numeric cells of a table, oriented for flattening.
///
/// For month layouts each row is one year and each column one month, so a
/// row-major walk is chronological. For the indicator layout each row is one
/// year and each column one indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGrid {
    /// Layout the cells were read from.
    pub layout: Layout,
    /// Period of `rows[0][0]`.
    pub anchor: CalendarAnchor,
    /// One label per row (year labels).
    pub row_labels: Vec<String>,
    /// One label per column (month headers or indicator names).
    pub column_labels: Vec<String>,
    /// Raw cell text, `row_labels.len()` rows of `column_labels.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl SubGrid {
    /// Number of numeric cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Find the calendar anchor of `grid` read as `layout`.
///
/// # Errors
/// Returns `UnrecognizedLayout` when the anchor token or pattern is absent.
pub fn locate_anchor(
    layout: Layout,
    grid: &RawGrid,
    matcher: &dyn AnchorMatcher,
) -> Result<Located, BccrError> {
    match layout {
        Layout::YearRowMonthCol => year_month::locate(grid, matcher),
        Layout::MonthRowYearCol => month_year::locate(grid, matcher),
        Layout::IndicatorRowYearCol => indicator_year::locate(grid, matcher),
    }
}

/// Slice the numeric cells below/after a located anchor.
///
/// # Errors
/// Returns `UnrecognizedLayout` when the grid is too small for the layout.
pub fn extract_subgrid(
    layout: Layout,
    grid: &RawGrid,
    located: Located,
    matcher: &dyn AnchorMatcher,
) -> Result<SubGrid, BccrError> {
    match layout {
        Layout::YearRowMonthCol => year_month::extract(grid, located, matcher),
        Layout::MonthRowYearCol => month_year::extract(grid, located, matcher),
        Layout::IndicatorRowYearCol => indicator_year::extract(grid, located, matcher),
    }
}

/// Locate the anchor and extract the sub-grid in one step.
///
/// # Errors
/// Returns `UnrecognizedLayout` as described for the two steps.
pub fn adapt(
    layout: Layout,
    grid: &RawGrid,
    matcher: &dyn AnchorMatcher,
) -> Result<SubGrid, BccrError> {
    let located = locate_anchor(layout, grid, matcher)?;
    extract_subgrid(layout, grid, located, matcher)
}

const MONTHS: usize = 12;

fn find_row(grid: &RawGrid, col: usize, mut pred: impl FnMut(&str) -> bool) -> Option<usize> {
    grid.column(col).position(|c| pred(c))
}
