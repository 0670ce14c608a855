//! Calendar frequencies of a series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BccrError;

/// Time granularity of a series.
///
/// Tables are published at a native `Monthly` or `Annual` frequency; the
/// coarser `Quarterly` and `Semiannual` cadences only arise from resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Frequency {
    /// One point per calendar month.
    Monthly,
    /// One point per calendar quarter (Mar, Jun, Sep, Dec).
    Quarterly,
    /// One point per half year (Jun, Dec).
    Semiannual,
    /// One point per calendar year.
    Annual,
}

impl Frequency {
    /// Number of calendar months covered by one period.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
            Self::Annual => 12,
        }
    }

    /// Whether tables can be published at this frequency.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(self, Self::Monthly | Self::Annual)
    }

    /// Whether a series at `self` can be aggregated into `target` windows.
    ///
    /// The target must be at least as coarse and an exact multiple.
    #[must_use]
    pub const fn divides(self, target: Self) -> bool {
        target.months() >= self.months() && target.months() % self.months() == 0
    }

    /// Short pandas-style code (`M`, `Q`, `S`, `A`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::Semiannual => "S",
            Self::Annual => "A",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        };
        f.write_str(s)
    }
}

impl FromStr for Frequency {
    type Err = BccrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "monthly" | "month" => Ok(Self::Monthly),
            "q" | "quarterly" | "quarter" => Ok(Self::Quarterly),
            "s" | "6m" | "semiannual" | "half-yearly" => Ok(Self::Semiannual),
            "a" | "y" | "annual" | "yearly" | "year" => Ok(Self::Annual),
            other => Err(BccrError::invalid_request(format!(
                "unknown frequency '{other}'"
            ))),
        }
    }
}
