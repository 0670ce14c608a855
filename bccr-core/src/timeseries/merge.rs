use std::collections::{BTreeSet, HashSet};

use crate::series::NamedSeries;
use crate::table::{CanonicalTable, Column};

/// Resolve a unique column name for `series`.
///
/// An empty name falls back to the identifier. A taken name becomes
/// `"{name}_{id}"`, then `"{name}_{id}_2"`, `"{name}_{id}_3"`, ...
fn unique_name(series: &NamedSeries, taken: &HashSet<String>) -> String {
    let base = match series.name.trim() {
        "" => series.id.to_string(),
        n => n.to_string(),
    };
    if !taken.contains(&base) {
        return base;
    }
    let suffixed = format!("{base}_{}", series.id);
    if !taken.contains(&suffixed) {
        return suffixed;
    }
    (2usize..)
        .map(|n| format!("{suffixed}_{n}"))
        .find(|c| !taken.contains(c))
        .unwrap_or(suffixed)
}

/// Align named series on the union of their dates.
///
/// Columns keep input order. Cells are filled by exact date match and are
/// missing where a series has no observation. Name collisions never
/// overwrite: later columns are suffixed deterministically from their
/// identifier.
pub fn merge_series<I>(series: I) -> CanonicalTable
where
    I: IntoIterator<Item = NamedSeries>,
{
    let series: Vec<NamedSeries> = series.into_iter().collect();

    let index: Vec<_> = series
        .iter()
        .flat_map(|s| s.series.dates())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut taken = HashSet::new();
    let mut columns = Vec::with_capacity(series.len());
    for s in series {
        let name = unique_name(&s, &taken);
        #[cfg(feature = "tracing")]
        if name != s.name {
            tracing::debug!(series = %s.id, requested = %s.name, resolved = %name, "renamed merged column");
        }
        taken.insert(name.clone());

        let mut values = vec![None; index.len()];
        for p in s.series.points() {
            if let Ok(row) = index.binary_search(&p.date) {
                values[row] = p.value;
            }
        }
        let span = s
            .series
            .points()
            .first()
            .zip(s.series.points().last())
            .map(|(a, b)| (a.date, b.date));
        columns.push(Column {
            name,
            id: s.id,
            frequency: s.series.frequency(),
            values,
            span,
        });
    }

    CanonicalTable { index, columns }
}
