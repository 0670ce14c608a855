//! Configuration types shared by the orchestrator and table sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::BccrError;

/// What to do when one series of a multi-series request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FailurePolicy {
    /// Abort the whole request on the first failing series.
    #[default]
    FailFast,
    /// Log and skip failing series; fail only if every series failed.
    SkipFailed,
}

/// How the tables of a multi-series request are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Fetch one table at a time, in request order.
    #[default]
    Sequential,
    /// Fetch all tables concurrently. Output order still follows the request.
    Concurrent,
}

/// Optional first/last year passed to the table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearBounds {
    /// First year to retrieve (inclusive).
    pub first: Option<i32>,
    /// Last year to retrieve (inclusive).
    pub last: Option<i32>,
}

impl YearBounds {
    /// Unbounded on both ends.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// Build validated bounds.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if `first > last`.
    pub fn new(first: Option<i32>, last: Option<i32>) -> Result<Self, BccrError> {
        let b = Self { first, last };
        b.validate()?;
        Ok(b)
    }

    /// Check that the bounds are ordered.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if `first > last`.
    pub fn validate(&self) -> Result<(), BccrError> {
        if let (Some(f), Some(l)) = (self.first, self.last)
            && f > l
        {
            return Err(BccrError::invalid_request(format!(
                "first year {f} is after last year {l}"
            )));
        }
        Ok(())
    }
}

/// Global configuration for the `Bccr` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BccrConfig {
    /// Policy applied when one series of a multi-series request fails.
    pub failure_policy: FailurePolicy,
    /// Sequential or concurrent fetching of the requested tables.
    pub fetch_strategy: FetchStrategy,
    /// Upper bound for a single table fetch; `None` waits on the source.
    pub source_timeout: Option<Duration>,
    /// Drop leading and trailing missing points of flattened month grids.
    pub trim_missing_edges: bool,
    /// Suppress download info (logged at debug instead of info).
    pub quiet: bool,
}

impl Default for BccrConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            fetch_strategy: FetchStrategy::default(),
            source_timeout: Some(Duration::from_secs(30)),
            trim_missing_edges: true,
            quiet: true,
        }
    }
}
