use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Frequency, Layout, SeriesId};

/// Unified error type for the bccr workspace.
///
/// Structural failures are errors; a missing *value* inside a table is not and
/// is carried as `None` in the series instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BccrError {
    /// The series request has the wrong shape or carries an invalid identifier.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The table source could not deliver the table (network, parse, timeout).
    #[error("source unavailable for series {series}: {msg}")]
    SourceUnavailable {
        /// Series whose table could not be fetched.
        series: SeriesId,
        /// Human-readable error message.
        msg: String,
    },

    /// The calendar anchor token or pattern was not found in the grid.
    #[error("unrecognized {layout} layout: {reason}")]
    UnrecognizedLayout {
        /// Layout the grid was read as.
        layout: Layout,
        /// What was expected and not found.
        reason: String,
    },

    /// The resample target is finer than, or not a multiple of, the native frequency.
    #[error("cannot resample {native} series to {target}")]
    UnsupportedFrequency {
        /// Native frequency of the series.
        native: Frequency,
        /// Requested target frequency.
        target: Frequency,
    },

    /// Every series of a request failed under the skip-failing policy.
    #[error("all series failed: {0:?}")]
    AllSeriesFailed(Vec<BccrError>),
}

impl BccrError {
    /// Helper: build an `InvalidRequest` error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Helper: build a `SourceUnavailable` error for a series.
    pub fn source_unavailable(series: SeriesId, msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            series,
            msg: msg.into(),
        }
    }

    /// Helper: build an `UnrecognizedLayout` error.
    pub fn unrecognized_layout(layout: Layout, reason: impl Into<String>) -> Self {
        Self::UnrecognizedLayout {
            layout,
            reason: reason.into(),
        }
    }

    /// Series the error is attached to, when it carries one.
    #[must_use]
    pub const fn series(&self) -> Option<SeriesId> {
        match self {
            Self::SourceUnavailable { series, .. } => Some(*series),
            _ => None,
        }
    }

    /// Flatten nested `AllSeriesFailed` structures into a plain vector.
    ///
    /// Other variants are preserved as-is.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSeriesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
