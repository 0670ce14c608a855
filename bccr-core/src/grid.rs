//! Raw tables as delivered by a `TableSource`.

use serde::{Deserialize, Serialize};

/// Immutable rectangular array of text cells.
///
/// Ragged input rows are padded with empty cells to the widest row, so every
/// row has `n_cols()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrid {
    cells: Vec<Vec<String>>,
    n_cols: usize,
}

impl RawGrid {
    /// Build a grid from rows of cells.
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let n_cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(n_cols, String::new());
        }
        Self { cells, n_cols }
    }

    /// Number of rows.
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    #[must_use]
    pub const fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty() || self.n_cols == 0
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Row `row`, or `None` when out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterator over the cells of column `col` from top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.cells
            .iter()
            .map(move |r| r.get(col).map_or("", String::as_str))
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }
}

/// Header text of a published table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTitle {
    /// Main title of the table.
    pub title: String,
    /// Subtitle (units, base year, etc.).
    pub subtitle: String,
}

/// One table as returned by a `TableSource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedTable {
    /// The raw cells.
    pub grid: RawGrid,
    /// Table title.
    pub title: String,
    /// Table subtitle.
    pub subtitle: String,
}

impl FetchedTable {
    /// Title and subtitle of the table.
    #[must_use]
    pub fn heading(&self) -> SeriesTitle {
        SeriesTitle {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
        }
    }
}
