//! Period arithmetic on a month grid.
//!
//! Every timestamp produced by this crate is the *last day* of its period:
//! months end on their last calendar day, quarters on Mar/Jun/Sep/Dec 31st
//! (or 30th), years on December 31st.

use bccr_types::{BccrError, Frequency};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Last day of `month` in `year`.
#[must_use]
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

// Months since year 0, zero based.
const fn month_index(year: i32, month: u32) -> i64 {
    year as i64 * 12 + (month as i64 - 1)
}

fn month_end_of_index(idx: i64) -> Option<NaiveDate> {
    let year = i32::try_from(idx.div_euclid(12)).ok()?;
    let month = u32::try_from(idx.rem_euclid(12) + 1).ok()?;
    month_end(year, month)
}

/// Whether `date` is the closing day of a period of `freq`.
#[must_use]
pub fn is_period_end(date: NaiveDate, freq: Frequency) -> bool {
    month_end(date.year(), date.month()) == Some(date) && date.month() % freq.months() == 0
}

/// Period end `steps` periods of `freq` after `date`.
#[must_use]
pub fn advance(date: NaiveDate, freq: Frequency, steps: i64) -> Option<NaiveDate> {
    let idx = month_index(date.year(), date.month())
        .checked_add(steps.checked_mul(i64::from(freq.months()))?)?;
    month_end_of_index(idx)
}

/// Closing day of the `target` window containing `date`.
///
/// Windows are aligned to calendar boundaries: quarters start in Jan/Apr/Jul/Oct,
/// half years in Jan/Jul, years in January.
#[must_use]
pub fn window_end(date: NaiveDate, target: Frequency) -> Option<NaiveDate> {
    let span = i64::from(target.months());
    let bucket = month_index(date.year(), date.month()).div_euclid(span);
    month_end_of_index(bucket * span + span - 1)
}

/// First logical period of an adapted grid at its native frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarAnchor {
    year: i32,
    // Closing month of the first period.
    end_month: u32,
    frequency: Frequency,
}

impl CalendarAnchor {
    /// Monthly grid starting at `month` of `year`.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if `month` is not in `1..=12`.
    pub fn monthly(year: i32, month: u32) -> Result<Self, BccrError> {
        if !(1..=12).contains(&month) {
            return Err(BccrError::invalid_request(format!(
                "month {month} is outside 1..=12"
            )));
        }
        Ok(Self {
            year,
            end_month: month,
            frequency: Frequency::Monthly,
        })
    }

    /// Annual grid starting at `year`.
    #[must_use]
    pub const fn annual(year: i32) -> Self {
        Self {
            year,
            end_month: 12,
            frequency: Frequency::Annual,
        }
    }

    /// Year of the first period.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Native frequency of the grid.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Closing date of the first period.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        month_end(self.year, self.end_month)
    }

    /// Closing date of the `k`-th period (zero based).
    #[must_use]
    pub fn period_end(&self, k: usize) -> Option<NaiveDate> {
        let steps = i64::try_from(k).ok()?;
        advance(self.start()?, self.frequency, steps)
    }
}
