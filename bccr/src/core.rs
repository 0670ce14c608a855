use std::sync::Arc;
use std::time::Duration;

use bccr_core::{
    AnchorMatcher, BccrConfig, BccrError, FailurePolicy, FetchStrategy, FetchedTable,
    LocaleMatcher, SeriesId, TableSource, YearBounds,
};

/// Orchestrator that fetches, adapts and aligns published tables.
pub struct Bccr {
    pub(crate) source: Arc<dyn TableSource>,
    pub(crate) matcher: Arc<dyn AnchorMatcher>,
    pub(crate) cfg: BccrConfig,
}

/// Builder for constructing a `Bccr` orchestrator with custom configuration.
pub struct BccrBuilder {
    source: Option<Arc<dyn TableSource>>,
    matcher: Option<Arc<dyn AnchorMatcher>>,
    cfg: BccrConfig,
}

impl Default for BccrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BccrBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: fail fast, sequential fetches, 30 s source timeout, edge
    /// trimming on, quiet download info, Spanish anchor tokens. A table source
    /// must be registered with [`with_source`](Self::with_source).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            matcher: None,
            cfg: BccrConfig::default(),
        }
    }

    /// Register the table source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a different anchor matcher (month token, year pattern, summary labels).
    #[must_use]
    pub fn matcher(mut self, matcher: Arc<dyn AnchorMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: BccrConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select what happens when one series of a multi-series request fails.
    ///
    /// - `FailFast`: the first failure aborts the request.
    /// - `SkipFailed`: failing series are logged and left out; the request
    ///   fails with `AllSeriesFailed` only when nothing succeeded.
    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.cfg.failure_policy = policy;
        self
    }

    /// Select sequential or concurrent fetching. Output order follows the request either way.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Bound each table fetch; `None` waits for the source to answer.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Toggle removal of leading/trailing missing points on month layouts.
    #[must_use]
    pub const fn trim_missing_edges(mut self, yes: bool) -> Self {
        self.cfg.trim_missing_edges = yes;
        self
    }

    /// Default for logging download info at debug (quiet) or info level.
    #[must_use]
    pub const fn quiet(mut self, yes: bool) -> Self {
        self.cfg.quiet = yes;
        self
    }

    /// Build the `Bccr` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if no table source was registered via [`with_source`](Self::with_source).
    pub fn build(self) -> Result<Bccr, BccrError> {
        let source = self.source.ok_or_else(|| {
            BccrError::invalid_request(
                "no table source registered; add one via with_source(...)",
            )
        })?;
        let matcher = self
            .matcher
            .unwrap_or_else(|| Arc::new(LocaleMatcher::spanish()));
        Ok(Bccr {
            source,
            matcher,
            cfg: self.cfg,
        })
    }
}

/// Map an error from the source to the series it was fetched for.
///
/// `SourceUnavailable` and `InvalidRequest` pass through; anything else is
/// reported as the source being unavailable for `series`.
pub fn tag_err(series: SeriesId, e: BccrError) -> BccrError {
    match e {
        e @ (BccrError::SourceUnavailable { .. } | BccrError::InvalidRequest(_)) => e,
        other => BccrError::source_unavailable(series, other.to_string()),
    }
}

impl Bccr {
    /// Start building a new `Bccr` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use bccr::{Bccr, FailurePolicy};
    ///
    /// let bccr = Bccr::builder()
    ///     .with_source(Arc::new(MyHttpSource::new()))
    ///     .failure_policy(FailurePolicy::SkipFailed)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> BccrBuilder {
        BccrBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BccrConfig {
        &self.cfg
    }

    /// Wrap a source future with the optional timeout and map expiry to `SourceUnavailable`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                series = %series,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        series: SeriesId,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, BccrError>
    where
        Fut: core::future::Future<Output = Result<T, BccrError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await).unwrap_or_else(|_| {
                Err(BccrError::source_unavailable(
                    series,
                    format!("{source_name} timed out after {} ms", t.as_millis()),
                ))
            }),
            None => fut.await,
        }
    }

    /// Fetch one table and emit its download info.
    pub(crate) async fn fetch_table(
        &self,
        id: SeriesId,
        years: YearBounds,
        quiet: bool,
    ) -> Result<FetchedTable, BccrError> {
        let table = Self::source_call_with_timeout(
            self.source.name(),
            id,
            self.cfg.source_timeout,
            self.source.fetch(id, years),
        )
        .await
        .map_err(|e| tag_err(id, e))?;

        #[cfg(feature = "tracing")]
        {
            let retrieved_at = chrono::Utc::now();
            if quiet {
                tracing::debug!(
                    series = %id,
                    title = %table.title,
                    subtitle = %table.subtitle,
                    %retrieved_at,
                    source = self.source.name(),
                    "downloaded table"
                );
            } else {
                tracing::info!(
                    series = %id,
                    title = %table.title,
                    subtitle = %table.subtitle,
                    %retrieved_at,
                    source = self.source.name(),
                    "downloaded table"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = quiet;

        Ok(table)
    }
}
