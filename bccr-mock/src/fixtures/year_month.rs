//! Year-row/month-column tables.
//!
//! - 125 `Medio circulante (M1)`: 2018-2020, `1000 + 10k` for month `k` since
//!   Jan 2018; 2020 is only published through June.
//! - 138 `Depósitos en cuenta corriente en colones`: 2019-2020, `500 + 5k` for
//!   month `k` since Jan 2019.

use bccr_core::{FetchedTable, SeriesId, YearBounds};

use super::{MONTHS, cell, clip, table};

/// Year-row/month-column table for `id` clipped to `years`.
pub fn by_id(id: SeriesId, years: YearBounds) -> Option<FetchedTable> {
    match id.get() {
        125 => Some(build(
            "Medio circulante (M1)",
            "Millones de colones",
            (2018, 2020),
            years,
            |k| (k < 30).then(|| 1000.0 + 10.0 * k as f64),
        )),
        138 => Some(build(
            "Depósitos en cuenta corriente en colones",
            "Millones de colones",
            (2019, 2020),
            years,
            |k| Some(500.0 + 5.0 * k as f64),
        )),
        _ => None,
    }
}

fn build(
    title: &str,
    subtitle: &str,
    (first, last): (i32, i32),
    years: YearBounds,
    value: impl Fn(usize) -> Option<f64>,
) -> FetchedTable {
    let mut header = vec![String::new()];
    header.extend(MONTHS.iter().map(|m| (*m).to_string()));
    header.push("Promedio".into());

    let mut body = vec![header];
    for y in clip(first, last, years) {
        let base = usize::try_from(y - first).unwrap_or(0) * 12;
        let vals: Vec<Option<f64>> = (0..12).map(|m| value(base + m)).collect();
        let present: Vec<f64> = vals.iter().flatten().copied().collect();
        let mut row = vec![y.to_string()];
        row.extend(vals.iter().map(|v| v.map(cell).unwrap_or_default()));
        row.push(if present.is_empty() {
            String::new()
        } else {
            cell(present.iter().sum::<f64>() / present.len() as f64)
        });
        body.push(row);
    }
    table(title, subtitle, body)
}
