//! Flattened time series.

use bccr_types::{BccrError, Frequency, SeriesId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, CalendarAnchor};

/// One dated value; `value` is `None` when the source cell was empty or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Closing day of the period.
    pub date: NaiveDate,
    /// Observed value, if any.
    pub value: Option<f64>,
}

/// Ordered sequence of observations at a single frequency.
///
/// Dates are period ends, strictly increasing, one period of `frequency` apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatSeries {
    frequency: Frequency,
    points: Vec<Observation>,
}

impl FlatSeries {
    /// Validate and wrap a list of observations.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if a date is not a period end of `frequency`
    /// or two consecutive dates are not exactly one period apart.
    pub fn new(frequency: Frequency, points: Vec<Observation>) -> Result<Self, BccrError> {
        for p in &points {
            if !calendar::is_period_end(p.date, frequency) {
                return Err(BccrError::invalid_request(format!(
                    "{} is not the end of a {frequency} period",
                    p.date
                )));
            }
        }
        for w in points.windows(2) {
            if calendar::advance(w[0].date, frequency, 1) != Some(w[1].date) {
                return Err(BccrError::invalid_request(format!(
                    "{} does not follow {} at {frequency} frequency",
                    w[1].date, w[0].date
                )));
            }
        }
        Ok(Self { frequency, points })
    }

    /// Empty series at `frequency`.
    #[must_use]
    pub const fn empty(frequency: Frequency) -> Self {
        Self {
            frequency,
            points: Vec::new(),
        }
    }

    /// Assign successive periods starting at `anchor` to `values`.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if the calendar overflows.
    pub fn from_anchor<I>(anchor: CalendarAnchor, values: I) -> Result<Self, BccrError>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(k, value)| {
                anchor
                    .period_end(k)
                    .map(|date| Observation { date, value })
                    .ok_or_else(|| {
                        BccrError::invalid_request(format!(
                            "period {k} after {} is out of calendar range",
                            anchor.year()
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            frequency: anchor.frequency(),
            points,
        })
    }

    /// Frequency of the series.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Observations in date order.
    #[must_use]
    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    /// Consume into the observations.
    #[must_use]
    pub fn into_points(self) -> Vec<Observation> {
        self.points
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dates in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Values in order.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Value at `date`; `None` if the date is absent or its value is missing.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .and_then(|i| self.points[i].value)
    }

    /// Drop leading and trailing missing observations.
    ///
    /// Interior gaps are kept so the fixed step is preserved.
    #[must_use]
    pub fn trim_missing(mut self) -> Self {
        let Some(first) = self.points.iter().position(|p| p.value.is_some()) else {
            self.points.clear();
            return self;
        };
        let last = self
            .points
            .iter()
            .rposition(|p| p.value.is_some())
            .unwrap_or(first);
        self.points.truncate(last + 1);
        self.points.drain(..first);
        self
    }
}

/// A series with its identifier and resolved display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    /// Source table identifier.
    pub id: SeriesId,
    /// Display name; empty falls back to the identifier when merged.
    pub name: String,
    /// The data.
    pub series: FlatSeries,
}

impl NamedSeries {
    /// Bundle a series with its identity.
    pub fn new(id: SeriesId, name: impl Into<String>, series: FlatSeries) -> Self {
        Self {
            id,
            name: name.into(),
            series,
        }
    }
}
