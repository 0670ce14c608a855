//! bccr-core
//!
//! Grid normalization engine shared across the bccr workspace.
//!
//! - `grid`: raw text tables as returned by a table source.
//! - `source`: the `TableSource` collaborator trait.
//! - `matcher`: locale-specific anchor token matching.
//! - `layout`: the three layout adapters (locate anchor, extract sub-grid).
//! - `timeseries`: flattening, resampling and merging.
//! - `request`: normalization of series requests.
#![warn(missing_docs)]

/// Period-end calendar arithmetic.
pub mod calendar;
/// Raw grids and fetched tables.
pub mod grid;
pub mod layout;
pub mod matcher;
pub mod request;
/// Flattened series and observations.
pub mod series;
/// The `TableSource` collaborator trait.
pub mod source;
/// Aligned multi-series tables.
pub mod table;
pub mod timeseries;

pub use bccr_types::*;
pub use calendar::CalendarAnchor;
pub use grid::{FetchedTable, RawGrid, SeriesTitle};
pub use layout::{Located, SubGrid, adapt, extract_subgrid, locate_anchor};
pub use matcher::{AnchorMatcher, LocaleMatcher};
pub use request::SeriesRequest;
pub use series::{FlatSeries, NamedSeries, Observation};
pub use source::TableSource;
pub use table::{CanonicalTable, Column};
pub use timeseries::flatten::{flatten, flatten_columns, parse_cell};
pub use timeseries::merge::merge_series;
pub use timeseries::resample::{AggregateFn, Aggregator, compensated_sum, resample};
