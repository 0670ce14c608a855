use bccr_core::{BccrError, FailurePolicy, SeriesId};

/// Apply a failure policy to per-series outcomes, keeping request order.
///
/// Rules:
/// - `FailFast`: the first error in request order is returned.
/// - `SkipFailed`: errors are logged and dropped; if every series failed the
///   result is `AllSeriesFailed(errors)`.
/// - An empty input yields an empty output.
///
/// # Errors
/// As described by the rules above.
pub fn collect_under_policy<T>(
    policy: FailurePolicy,
    results: Vec<(SeriesId, Result<T, BccrError>)>,
) -> Result<Vec<T>, BccrError> {
    if policy == FailurePolicy::FailFast {
        return results.into_iter().map(|(_, r)| r).collect();
    }

    let mut oks = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for (id, r) in results {
        match r {
            Ok(v) => oks.push(v),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(series = %id, error = %e, "skipping failed series");
                #[cfg(not(feature = "tracing"))]
                let _ = id;
                errors.push(e);
            }
        }
    }
    if oks.is_empty() && !errors.is_empty() {
        return Err(BccrError::AllSeriesFailed(errors));
    }
    Ok(oks)
}
