//! Indicator-row/year-column tables.
//!
//! - 189 `PIB real por actividad económica`
//! - 230 `PIB nominal por actividad económica`
//!
//! Both cover 2018-2020 with indicators `Agricultura`, `Industria` and
//! `Servicios` under an empty `Producción` heading row.

use bccr_core::{FetchedTable, SeriesId, YearBounds};

use super::{cell, clip, table};

const FIRST: i32 = 2018;
const LAST: i32 = 2020;

const INDICATORS: [(&str, f64, f64); 3] = [
    ("Agricultura", 100.0, 1.0),
    ("Industria", 300.0, 2.0),
    ("Servicios", 600.0, 3.0),
];

/// Indicator table for `id` clipped to `years`.
pub fn by_id(id: SeriesId, years: YearBounds) -> Option<FetchedTable> {
    match id.get() {
        189 => Some(build(
            "PIB real por actividad económica",
            "Millones de colones de 2017",
            years,
            1.0,
        )),
        230 => Some(build(
            "PIB nominal por actividad económica",
            "Millones de colones",
            years,
            1.5,
        )),
        _ => None,
    }
}

fn build(title: &str, subtitle: &str, years: YearBounds, scale: f64) -> FetchedTable {
    let span: Vec<i32> = clip(FIRST, LAST, years).collect();

    let mut header = vec![String::new()];
    header.extend(span.iter().map(ToString::to_string));
    let mut heading = vec!["Producción".to_string()];
    heading.extend(span.iter().map(|_| String::new()));

    let mut body = vec![header, heading];
    for (name, base, step) in INDICATORS {
        let mut row = vec![name.to_string()];
        row.extend(
            span.iter()
                .map(|&y| cell(scale * (base + step * f64::from(y - FIRST)))),
        );
        body.push(row);
    }
    table(title, subtitle, body)
}
