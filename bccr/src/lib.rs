//! Bccr turns statistical tables published as text grids into aligned time series.
//!
//! Overview
//! - Fetches raw tables through a pluggable [`TableSource`](bccr_core::TableSource).
//! - Adapts the three published orientations (year/month, month/year,
//!   indicator/year) by locating a calendar anchor in the grid.
//! - Flattens each table into dated observations, optionally resamples them
//!   to a coarser frequency, and merges several tables on the union of dates.
//!
//! Key behaviors and trade-offs
//! - Return shape: a single bare identifier reads into one series; a mapping
//!   reads into a table, even with one entry. Indicator reads always return a table.
//! - Failure policy:
//!   - `FailFast`: the first failing series aborts the request.
//!   - `SkipFailed`: failing series are logged and left out.
//! - Fetch strategy: `Sequential` fetches in request order; `Concurrent` fetches
//!   all tables at once. Output order follows the request in both.
//! - Timestamps are period ends: monthly points fall on the last day of the
//!   month, annual points on December 31st.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use bccr::{Bccr, Frequency, ReadOptions, SeriesRequest};
//!
//! let bccr = Bccr::builder().with_source(Arc::new(MySource::new())).build()?;
//!
//! let request: SeriesRequest = "125=M1;138=DCCMN".parse()?;
//! let opts = ReadOptions::new()
//!     .years(Some(1999), None)?
//!     .frequency(Frequency::Quarterly);
//! let table = bccr.read_year_row_month_col(&request, &opts).await?.into_table();
//! ```
//!
//! See `bccr/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod reader;

pub use core::{Bccr, BccrBuilder, tag_err};
pub use reader::util::collect_under_policy;
pub use reader::{ReadOptions, ReadOutput, SeriesSpec};

// Re-export core types for convenience
pub use bccr_core::{
    AggregateFn, Aggregation, Aggregator, AnchorMatcher, BccrConfig, BccrError, CalendarAnchor,
    CanonicalTable, Column, FailurePolicy, FetchStrategy, FetchedTable, FlatSeries, Frequency,
    Layout, LocaleMatcher, NamedSeries, Observation, RawGrid, SeriesId, SeriesRequest,
    SeriesTitle, TableSource, YearBounds,
};
