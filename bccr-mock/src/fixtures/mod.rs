use bccr_core::{FetchedTable, RawGrid, SeriesId, YearBounds};

pub mod indicator_year;
pub mod month_year;
pub mod year_month;

/// Spanish month headers in publication order.
pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Setiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Fixture table for `id` clipped to `years`, from any layout.
pub fn by_id(id: SeriesId, years: YearBounds) -> Option<FetchedTable> {
    year_month::by_id(id, years)
        .or_else(|| month_year::by_id(id, years))
        .or_else(|| indicator_year::by_id(id, years))
}

/// Decimal-comma rendering used by the publisher.
pub(crate) fn cell(v: f64) -> String {
    format!("{v:.2}").replace('.', ",")
}

pub(crate) fn clip(first: i32, last: i32, years: YearBounds) -> std::ops::RangeInclusive<i32> {
    let lo = years.first.map_or(first, |f| f.max(first));
    let hi = years.last.map_or(last, |l| l.min(last));
    lo..=hi
}

/// Title and subtitle rows followed by `body`, as the publisher lays them out.
pub(crate) fn table(title: &str, subtitle: &str, body: Vec<Vec<String>>) -> FetchedTable {
    let mut rows = vec![vec![title.to_string()], vec![subtitle.to_string()]];
    rows.extend(body);
    FetchedTable {
        grid: RawGrid::new(rows),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}
