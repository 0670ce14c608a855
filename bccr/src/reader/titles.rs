use std::collections::{BTreeMap, HashSet};

use bccr_core::{BccrError, FailurePolicy, FetchStrategy, SeriesId, SeriesTitle, YearBounds};

use super::util::collect_under_policy;
use crate::Bccr;

impl Bccr {
    /// Fetch the title and subtitle of each table.
    ///
    /// Repeated identifiers are fetched once. Failures follow the configured
    /// failure policy; a sequential `FailFast` read stops at the first failure.
    ///
    /// # Errors
    /// `InvalidRequest` when `ids` is empty; otherwise per-series errors as for
    /// the read operations.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "bccr::reader::read_titles", skip(self, ids))
    )]
    pub async fn read_titles<I>(&self, ids: I) -> Result<BTreeMap<SeriesId, SeriesTitle>, BccrError>
    where
        I: IntoIterator<Item = SeriesId>,
    {
        let mut seen = HashSet::new();
        let ids: Vec<SeriesId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        if ids.is_empty() {
            return Err(BccrError::invalid_request("no series requested"));
        }

        let quiet = self.cfg.quiet;
        let fail_fast = self.cfg.failure_policy == FailurePolicy::FailFast;
        let fetch_one = |id: SeriesId| async move {
            let r = self
                .fetch_table(id, YearBounds::all(), quiet)
                .await
                .map(|t| (id, t.heading()));
            (id, r)
        };

        let results = if self.cfg.fetch_strategy == FetchStrategy::Concurrent {
            futures::future::join_all(ids.iter().copied().map(fetch_one)).await
        } else {
            let mut out = Vec::with_capacity(ids.len());
            for id in ids.iter().copied() {
                let (id, r) = fetch_one(id).await;
                if fail_fast {
                    out.push((id, Ok(r?)));
                } else {
                    out.push((id, r));
                }
            }
            out
        };

        Ok(collect_under_policy(self.cfg.failure_policy, results)?
            .into_iter()
            .collect())
    }
}
