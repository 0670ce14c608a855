use bccr_core::{Aggregator, BccrError, CanonicalTable, NamedSeries, merge_series, resample};

use super::{ReadOptions, SeriesSpec, check_unique};
use crate::Bccr;

impl Bccr {
    /// Read tables of different layouts into one aligned table.
    ///
    /// Behavior:
    /// - Each spec names its own layout and may carry its own aggregation.
    /// - With `opts.frequency` set, every series is resampled to it.
    /// - Without it, if the native frequencies differ (monthly and annual
    ///   tables), every series is resampled to the coarsest one present so the
    ///   columns line up.
    ///
    /// # Errors
    /// `InvalidRequest` for an empty or duplicated spec list or inverted year
    /// bounds; per-series errors subject to the failure policy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::reader::read",
            skip(self, specs, opts),
            fields(series = specs.len(), frequency = ?opts.frequency),
        )
    )]
    pub async fn read(
        &self,
        specs: &[SeriesSpec],
        opts: &ReadOptions,
    ) -> Result<CanonicalTable, BccrError> {
        if specs.is_empty() {
            return Err(BccrError::invalid_request("no series requested"));
        }
        check_unique(specs)?;
        opts.years.validate()?;

        let series = self.read_specs(specs, opts).await?;
        if opts.frequency.is_some() {
            return Ok(merge_series(series));
        }

        let Some(coarsest) = series.iter().map(|s| s.series.frequency()).max() else {
            return Ok(merge_series(series));
        };
        if series.iter().all(|s| s.series.frequency() == coarsest) {
            return Ok(merge_series(series));
        }

        #[cfg(feature = "tracing")]
        tracing::info!(frequency = %coarsest, "mixed native frequencies; resampling to the coarsest");

        let default_agg = opts.aggregator.clone().unwrap_or_default();
        let aligned = series
            .into_iter()
            .map(|s| {
                let agg: &Aggregator = specs
                    .iter()
                    .find(|sp| sp.id == s.id)
                    .and_then(|sp| sp.aggregator.as_ref())
                    .unwrap_or(&default_agg);
                let NamedSeries { id, name, series } = s;
                resample(series, Some(coarsest), agg).map(|r| NamedSeries::new(id, name, r))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(merge_series(aligned))
    }
}
