use std::fmt;
use std::sync::Arc;

use bccr_types::{Aggregation, BccrError, Frequency};
use chrono::NaiveDate;

use crate::calendar;
use crate::series::{FlatSeries, Observation};

/// Caller-supplied window function over the non-missing values of a window.
pub type AggregateFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// How a resampling window is reduced to one value.
///
/// The function only ever sees the non-missing inputs of a window and is never
/// called on an empty slice: a window with no present value is missing in the
/// output. A non-finite result is also recorded as missing.
#[derive(Clone)]
pub enum Aggregator {
    /// One of the built-in aggregations.
    Builtin(Aggregation),
    /// Arbitrary function.
    Custom(Arc<AggregateFn>),
}

impl Aggregator {
    /// Wrap a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Reduce a non-empty slice.
    #[must_use]
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Self::Builtin(a) => match a {
                Aggregation::Mean => compensated_sum(values) / values.len() as f64,
                Aggregation::Sum => compensated_sum(values),
                Aggregation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
                Aggregation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                Aggregation::First => values.first().copied().unwrap_or(f64::NAN),
                Aggregation::Last => values.last().copied().unwrap_or(f64::NAN),
                _ => compensated_sum(values) / values.len() as f64,
            },
            Self::Custom(f) => f(values),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::Builtin(Aggregation::Mean)
    }
}

impl From<Aggregation> for Aggregator {
    fn from(a: Aggregation) -> Self {
        Self::Builtin(a)
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(a) => f.debug_tuple("Builtin").field(a).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Neumaier-compensated sum.
#[must_use]
pub fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            c += (sum - t) + v;
        } else {
            c += (v - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Group consecutive observations by window, keeping only present values.
fn resample_by<F>(
    points: Vec<Observation>,
    bucket_of: F,
) -> Result<Vec<(NaiveDate, Vec<f64>)>, BccrError>
where
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    let mut out: Vec<(NaiveDate, Vec<f64>)> = Vec::new();
    for p in points {
        let bucket = bucket_of(p.date).ok_or_else(|| {
            BccrError::invalid_request(format!("{} has no resampling window", p.date))
        })?;
        match out.last_mut() {
            Some((b, present)) if *b == bucket => present.extend(p.value),
            _ => out.push((bucket, p.value.into_iter().collect())),
        }
    }
    Ok(out)
}

/// Downsample `series` to `target` windows aligned to calendar boundaries.
///
/// `None` or the series' own frequency returns the input unchanged. Each
/// window, complete or partial, yields one point dated at the window end.
///
/// # Errors
/// Returns `UnsupportedFrequency` if `target` is finer than, or not a multiple
/// of, the series frequency.
pub fn resample(
    series: FlatSeries,
    target: Option<Frequency>,
    aggregator: &Aggregator,
) -> Result<FlatSeries, BccrError> {
    let native = series.frequency();
    let Some(target) = target.filter(|t| *t != native) else {
        return Ok(series);
    };
    if !native.divides(target) {
        return Err(BccrError::UnsupportedFrequency { native, target });
    }
    let buckets = resample_by(series.into_points(), |d| calendar::window_end(d, target))?;
    let points = buckets
        .into_iter()
        .map(|(date, present)| {
            let value = if present.is_empty() {
                None
            } else {
                Some(aggregator.apply(&present)).filter(|v| v.is_finite())
            };
            Observation { date, value }
        })
        .collect();
    FlatSeries::new(target, points)
}
