//! Read operations exposed by [`Bccr`](crate::Bccr).
pub mod layouts;
pub mod mixed;
pub mod titles;
pub mod util;

use bccr_core::{
    Aggregator, BccrError, CanonicalTable, FailurePolicy, FetchStrategy, FlatSeries, Frequency,
    Layout, NamedSeries, SeriesId, YearBounds, adapt, flatten, flatten_columns, merge_series,
    resample,
};

use crate::Bccr;

/// Per-call parameters shared by every read operation.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// First/last year requested from the source.
    pub years: YearBounds,
    /// Resample target; `None` keeps the native frequency.
    pub frequency: Option<Frequency>,
    /// Window aggregation; `None` is the mean.
    pub aggregator: Option<Aggregator>,
    /// Override of the configured `quiet` flag.
    pub quiet: Option<bool>,
}

impl ReadOptions {
    /// Native frequency, all years, default aggregation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the years requested from the source.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if `first > last`.
    pub fn years(mut self, first: Option<i32>, last: Option<i32>) -> Result<Self, BccrError> {
        self.years = YearBounds::new(first, last)?;
        Ok(self)
    }

    /// Resample to `freq`.
    #[must_use]
    pub const fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Aggregate resampling windows with `agg`.
    #[must_use]
    pub fn aggregator(mut self, agg: impl Into<Aggregator>) -> Self {
        self.aggregator = Some(agg.into());
        self
    }

    /// Log download info at debug (`true`) or info (`false`) level.
    #[must_use]
    pub const fn quiet(mut self, yes: bool) -> Self {
        self.quiet = Some(yes);
        self
    }
}

/// One table of a mixed-layout read.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    /// Table identifier.
    pub id: SeriesId,
    /// How the table is laid out.
    pub layout: Layout,
    /// Display name for month layouts, name prefix for indicator tables.
    /// `None` uses the table title (month layouts) or no prefix (indicators).
    pub name: Option<String>,
    /// Aggregation for this table only, overriding the one in `ReadOptions`.
    pub aggregator: Option<Aggregator>,
}

impl SeriesSpec {
    /// Table `id` read as `layout`, unnamed, with the call's aggregation.
    #[must_use]
    pub const fn new(id: SeriesId, layout: Layout) -> Self {
        Self {
            id,
            layout,
            name: None,
            aggregator: None,
        }
    }

    /// Set the display name or indicator prefix.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a table-specific aggregation.
    #[must_use]
    pub fn aggregator(mut self, agg: impl Into<Aggregator>) -> Self {
        self.aggregator = Some(agg.into());
        self
    }
}

/// Result of a month-layout read.
///
/// A single bare identifier reads into one series; any mapping reads into a
/// table, even with one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutput {
    /// Single-identifier request.
    Series(NamedSeries),
    /// Mapping request.
    Table(CanonicalTable),
}

impl ReadOutput {
    /// The series of a single-identifier read.
    #[must_use]
    pub const fn as_series(&self) -> Option<&NamedSeries> {
        match self {
            Self::Series(s) => Some(s),
            Self::Table(_) => None,
        }
    }

    /// The table of a mapping read.
    #[must_use]
    pub const fn as_table(&self) -> Option<&CanonicalTable> {
        match self {
            Self::Table(t) => Some(t),
            Self::Series(_) => None,
        }
    }

    /// The flat series of a single-identifier read.
    #[must_use]
    pub fn into_series(self) -> Option<FlatSeries> {
        match self {
            Self::Series(s) => Some(s.series),
            Self::Table(_) => None,
        }
    }

    /// Always a table; a single series becomes a one-column table.
    #[must_use]
    pub fn into_table(self) -> CanonicalTable {
        match self {
            Self::Series(s) => merge_series([s]),
            Self::Table(t) => t,
        }
    }
}

impl Bccr {
    pub(crate) fn quiet_for(&self, opts: &ReadOptions) -> bool {
        opts.quiet.unwrap_or(self.cfg.quiet)
    }

    /// Fetch, adapt, flatten and resample one table into named series.
    ///
    /// Month layouts yield one series; indicator tables one per indicator.
    pub(crate) async fn read_spec(
        &self,
        spec: &SeriesSpec,
        opts: &ReadOptions,
        quiet: bool,
    ) -> Result<Vec<NamedSeries>, BccrError> {
        let table = self.fetch_table(spec.id, opts.years, quiet).await?;
        let sub = adapt(spec.layout, &table.grid, self.matcher.as_ref())?;
        let agg = spec
            .aggregator
            .as_ref()
            .or(opts.aggregator.as_ref())
            .cloned()
            .unwrap_or_default();

        if spec.layout == Layout::IndicatorRowYearCol {
            let prefix = spec.name.as_deref().unwrap_or_default();
            return flatten_columns(&sub)?
                .into_iter()
                .map(|(label, s)| {
                    let s = resample(s, opts.frequency, &agg)?;
                    Ok(NamedSeries::new(spec.id, format!("{prefix}{label}"), s))
                })
                .collect();
        }

        let mut flat = flatten(&sub)?;
        if self.cfg.trim_missing_edges {
            flat = flat.trim_missing();
        }
        let flat = resample(flat, opts.frequency, &agg)?;
        let name = spec
            .name
            .clone()
            .unwrap_or_else(|| table.title.trim().to_string());
        Ok(vec![NamedSeries::new(spec.id, name, flat)])
    }

    /// Read every spec under the configured fetch strategy and failure policy.
    ///
    /// Results keep request order. Under `FailFast` a sequential read stops
    /// fetching at the first failure.
    pub(crate) async fn read_specs(
        &self,
        specs: &[SeriesSpec],
        opts: &ReadOptions,
    ) -> Result<Vec<NamedSeries>, BccrError> {
        let quiet = self.quiet_for(opts);
        let fail_fast = self.cfg.failure_policy == FailurePolicy::FailFast;

        let results: Vec<(SeriesId, Result<Vec<NamedSeries>, BccrError>)> =
            if self.cfg.fetch_strategy == FetchStrategy::Concurrent {
                let tasks = specs.iter().map(|s| async move {
                    (s.id, self.read_spec(s, opts, quiet).await)
                });
                futures::future::join_all(tasks).await
            } else {
                let mut out = Vec::with_capacity(specs.len());
                for s in specs {
                    let r = self.read_spec(s, opts, quiet).await;
                    if fail_fast {
                        out.push((s.id, Ok(r?)));
                    } else {
                        out.push((s.id, r));
                    }
                }
                out
            };

        let parts = util::collect_under_policy(self.cfg.failure_policy, results)?;
        Ok(parts.into_iter().flatten().collect())
    }
}

pub(crate) fn check_unique(specs: &[SeriesSpec]) -> Result<(), BccrError> {
    let mut seen = std::collections::HashSet::new();
    for s in specs {
        if !seen.insert(s.id) {
            return Err(BccrError::invalid_request(format!(
                "series {} requested more than once",
                s.id
            )));
        }
    }
    Ok(())
}
