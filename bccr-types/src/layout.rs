use std::fmt;

use serde::{Deserialize, Serialize};

/// The three table orientations used by the publisher.
///
/// The set is closed: every table the publisher exposes is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Rows are years, columns are months; column 0 holds the year label.
    YearRowMonthCol,
    /// Rows are months, columns are years; column 0 holds the month name.
    MonthRowYearCol,
    /// Rows are named indicators, columns are years.
    IndicatorRowYearCol,
}

impl Layout {
    /// Stable lowercase label used in logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearRowMonthCol => "year-row/month-col",
            Self::MonthRowYearCol => "month-row/year-col",
            Self::IndicatorRowYearCol => "indicator-row/year-col",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
