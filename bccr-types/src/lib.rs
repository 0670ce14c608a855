//! Shared error taxonomy, identifiers and configuration primitives for the bccr workspace.
#![warn(missing_docs)]

mod aggregation;
mod config;
mod error;
mod frequency;
mod layout;
mod series;

pub use aggregation::Aggregation;
pub use config::{BccrConfig, FailurePolicy, FetchStrategy, YearBounds};
pub use error::BccrError;
pub use frequency::Frequency;
pub use layout::Layout;
pub use series::SeriesId;
