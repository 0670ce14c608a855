use std::sync::Arc;

use bccr::{Bccr, BccrBuilder, FetchedTable, RawGrid};
use bccr_mock::MockTableSource;
use chrono::NaiveDate;

/// Builder wired to the static fixture source.
pub fn mock_builder() -> BccrBuilder {
    Bccr::builder().with_source(Arc::new(MockTableSource::new()))
}

/// Orchestrator with default configuration over the static fixture source.
pub fn mock_bccr() -> Bccr {
    mock_builder().build().unwrap()
}

/// Date from components for readability in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("invalid date")
}

/// Minimal year-row/month-column table for one year with constant values.
pub fn one_year_table(title: &str, year: i32, value: &str) -> FetchedTable {
    let mut header = vec![String::new()];
    header.extend(
        [
            "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
            "Setiembre", "Octubre", "Noviembre", "Diciembre",
        ]
        .map(String::from),
    );
    let mut row = vec![year.to_string()];
    row.extend(std::iter::repeat_n(value.to_string(), 12));
    FetchedTable {
        grid: RawGrid::new(vec![vec![title.to_string()], header, row]),
        title: title.to_string(),
        subtitle: String::new(),
    }
}
