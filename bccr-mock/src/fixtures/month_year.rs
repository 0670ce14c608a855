//! Month-row/year-column tables.
//!
//! - 9 `Índice de precios al consumidor (IPC)`: 2019-2020, `100 + 0.5k`.
//! - 289 `IPC no transable`: 2019-2020, `200 + k`.
//!
//! `k` counts months since January 2019. Both tables close with a `Total` row.

use bccr_core::{FetchedTable, SeriesId, YearBounds};

use super::{MONTHS, cell, clip, table};

const FIRST: i32 = 2019;
const LAST: i32 = 2020;

/// Month-row/year-column table for `id` clipped to `years`.
pub fn by_id(id: SeriesId, years: YearBounds) -> Option<FetchedTable> {
    match id.get() {
        9 => Some(build(
            "Índice de precios al consumidor (IPC)",
            "Base diciembre 2020 = 100",
            years,
            |k| 100.0 + 0.5 * k as f64,
        )),
        289 => Some(build(
            "IPC no transable",
            "Base diciembre 2020 = 100",
            years,
            |k| 200.0 + k as f64,
        )),
        _ => None,
    }
}

fn build(
    title: &str,
    subtitle: &str,
    years: YearBounds,
    value: impl Fn(usize) -> f64,
) -> FetchedTable {
    let span: Vec<i32> = clip(FIRST, LAST, years).collect();

    let mut header = vec![String::new()];
    header.extend(span.iter().map(ToString::to_string));
    let mut body = vec![header];

    let offset = |y: i32| usize::try_from(y - FIRST).unwrap_or(0) * 12;
    for (m, name) in MONTHS.iter().enumerate() {
        let mut row = vec![(*name).to_string()];
        row.extend(span.iter().map(|&y| cell(value(offset(y) + m))));
        body.push(row);
    }
    let mut total = vec!["Total".to_string()];
    total.extend(
        span.iter()
            .map(|&y| cell((0..12).map(|m| value(offset(y) + m)).sum())),
    );
    body.push(total);
    table(title, subtitle, body)
}
