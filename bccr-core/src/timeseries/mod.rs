//! Time-series utilities.
//!
//! - `flatten`: turn an adapted sub-grid into dated observations
//! - `resample`: aggregate a series into coarser calendar windows
//! - `merge`: align several named series on one date index
/// Sub-grid flattening and cell parsing.
pub mod flatten;
/// Merging of named series into a `CanonicalTable`.
pub mod merge;
/// Downsampling with built-in or custom aggregations.
pub mod resample;
