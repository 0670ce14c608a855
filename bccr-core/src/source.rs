use async_trait::async_trait;
use bccr_types::{BccrError, SeriesId, YearBounds};

use crate::grid::FetchedTable;

/// Upstream collaborator that retrieves one published table.
///
/// Implementations own transport and HTML parsing; they hand back the raw
/// text grid plus its title and subtitle. Any failure should be reported as
/// `BccrError::SourceUnavailable` for the requested series.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Stable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetch table `id`, optionally limited to `years`.
    async fn fetch(&self, id: SeriesId, years: YearBounds) -> Result<FetchedTable, BccrError>;
}
