//! Aligned multi-series output.

use bccr_types::{BccrError, Frequency, SeriesId};
use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar;
use crate::series::{FlatSeries, Observation};

/// One named column of a `CanonicalTable`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Unique display name.
    pub name: String,
    /// Table the column came from.
    pub id: SeriesId,
    /// Frequency of the merged series.
    pub frequency: Frequency,
    /// One value per row of the table index.
    pub values: Vec<Option<f64>>,
    /// First and last date of the merged series, if it was not empty.
    pub span: Option<(NaiveDate, NaiveDate)>,
}

/// Named series aligned on the union of their dates.
///
/// Rows are period-end dates in strictly increasing order. A cell is `None`
/// when the series has no observation at that date or the value was missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalTable {
    pub(crate) index: Vec<NaiveDate>,
    pub(crate) columns: Vec<Column>,
}

impl CanonicalTable {
    /// Row dates.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Columns in merge order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in merge order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Column called `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    /// Cell at (`date`, `name`).
    #[must_use]
    pub fn value(&self, date: NaiveDate, name: &str) -> Option<f64> {
        let row = self.index.binary_search(&date).ok()?;
        self.column(name)?.values[row]
    }

    /// Rows as `(date, values)` in column order.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, Vec<Option<f64>>)> + '_ {
        self.index.iter().enumerate().map(|(i, d)| {
            let vals = self.columns.iter().map(|c| c.values[i]).collect();
            (*d, vals)
        })
    }

    /// Extract column `name` back into a series at its own frequency.
    ///
    /// Only the rows inside the column's original span that fall on its
    /// period ends are returned, so a merged series comes back unchanged.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if no column is called `name`.
    pub fn series(&self, name: &str) -> Result<FlatSeries, BccrError> {
        let col = self
            .column(name)
            .ok_or_else(|| BccrError::invalid_request(format!("no column named '{name}'")))?;
        let Some((first, last)) = col.span else {
            return Ok(FlatSeries::empty(col.frequency));
        };
        let points = self
            .index
            .iter()
            .zip(&col.values)
            .filter(|(d, _)| {
                **d >= first && **d <= last && calendar::is_period_end(**d, col.frequency)
            })
            .map(|(d, v)| Observation { date: *d, value: *v })
            .collect();
        FlatSeries::new(col.frequency, points)
    }
}
