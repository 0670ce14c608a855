//! Deterministic table sources for tests and examples.
//!
//! [`MockTableSource`] serves static fixture tables for each layout.
//! [`DynamicMockSource`] defers every fetch to rules set from the outside
//! through a [`DynamicMockController`].
use std::time::Duration;

use async_trait::async_trait;
use bccr_core::{BccrError, FetchedTable, SeriesId, TableSource, YearBounds};

mod dynamic;
/// Fixture tables served by [`MockTableSource`].
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Identifier whose fetch always fails with `SourceUnavailable`.
pub const FAIL_ID: SeriesId = SeriesId(666);
/// Identifier whose fetch is slow (200 ms) before failing as not found.
pub const SLOW_ID: SeriesId = SeriesId(999);

/// Year-row/month-column fixtures.
pub const YEAR_MONTH_IDS: [SeriesId; 2] = [SeriesId(125), SeriesId(138)];
/// Month-row/year-column fixtures.
pub const MONTH_YEAR_IDS: [SeriesId; 2] = [SeriesId(9), SeriesId(289)];
/// Indicator-row/year-column fixtures.
pub const INDICATOR_YEAR_IDS: [SeriesId; 2] = [SeriesId(189), SeriesId(230)];

/// Mock source for CI-safe examples. Serves deterministic tables from static fixtures.
pub struct MockTableSource;

impl Default for MockTableSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTableSource {
    /// Source serving the static fixture tables.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_delay(id: SeriesId) -> Result<(), BccrError> {
        if id == FAIL_ID {
            return Err(BccrError::source_unavailable(id, "forced failure"));
        }
        if id == SLOW_ID {
            // Long enough to trip a short orchestrator timeout.
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        Ok(())
    }
}

#[async_trait]
impl TableSource for MockTableSource {
    fn name(&self) -> &'static str {
        "bccr-mock"
    }

    async fn fetch(&self, id: SeriesId, years: YearBounds) -> Result<FetchedTable, BccrError> {
        Self::maybe_fail_or_delay(id).await?;
        fixtures::by_id(id, years)
            .ok_or_else(|| BccrError::source_unavailable(id, "no such table"))
    }
}
