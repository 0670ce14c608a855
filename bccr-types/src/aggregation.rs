use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BccrError;

/// Built-in window aggregations used when resampling to a coarser frequency.
///
/// All of them operate on the non-missing inputs of a window only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Aggregation {
    /// Arithmetic mean.
    #[default]
    Mean,
    /// Sum of the values.
    Sum,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Earliest value in the window.
    First,
    /// Latest value in the window.
    Last,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
            Self::First => "first",
            Self::Last => "last",
        };
        f.write_str(s)
    }
}

impl FromStr for Aggregation {
    type Err = BccrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" | "avg" | "average" => Ok(Self::Mean),
            "sum" => Ok(Self::Sum),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(BccrError::invalid_request(format!(
                "unknown aggregation '{other}'"
            ))),
        }
    }
}
