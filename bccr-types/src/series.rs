//! Series identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BccrError;

/// Publisher-assigned identifier of a statistical table.
///
/// Identifiers are opaque non-negative integers; the type rules out negative
/// values at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub u32);

impl SeriesId {
    /// Construct a new identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for SeriesId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for SeriesId {
    type Error = BccrError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u32::try_from(id).map(Self).map_err(|_| {
            BccrError::invalid_request(format!(
                "series identifier must be a non-negative integer, got {id}"
            ))
        })
    }
}

impl FromStr for SeriesId {
    type Err = BccrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        t.parse::<u32>().map(Self).map_err(|_| {
            BccrError::invalid_request(format!(
                "series identifier must be a non-negative integer, got '{t}'"
            ))
        })
    }
}
