use bccr::{Aggregation, BccrError, Frequency, ReadOptions, ReadOutput, SeriesId, SeriesRequest};

use crate::helpers::{d, mock_bccr, mock_builder};

#[tokio::test]
async fn single_id_reads_into_a_named_series() {
    let bccr = mock_bccr();
    let out = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await
        .unwrap();

    let ReadOutput::Series(s) = out else {
        panic!("expected a series for a bare identifier");
    };
    assert_eq!(s.id, SeriesId(125));
    assert_eq!(s.name, "Medio circulante (M1)");
    // 2020 is published through June; the empty tail is trimmed.
    assert_eq!(s.series.len(), 30);
    assert_eq!(s.series.frequency(), Frequency::Monthly);
    assert_eq!(s.series.points()[0].date, d(2018, 1, 31));
    assert_eq!(s.series.get(d(2018, 1, 31)), Some(1000.0));
    assert_eq!(s.series.points()[29].date, d(2020, 6, 30));
    assert_eq!(s.series.get(d(2020, 6, 30)), Some(1290.0));
}

#[tokio::test]
async fn summary_column_is_not_read_as_a_month() {
    let bccr = mock_bccr();
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(138u32), &ReadOptions::new())
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 24);
    // Dec 2019 is followed by Jan 2020, not by the yearly average.
    assert_eq!(s.get(d(2019, 12, 31)), Some(555.0));
    assert_eq!(s.get(d(2020, 1, 31)), Some(560.0));
}

#[tokio::test]
async fn mapping_reads_into_a_table_on_the_union_of_dates() {
    let bccr = mock_bccr();
    let req: SeriesRequest = "125=M1;138=DCCMN".parse().unwrap();
    let table = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap()
        .into_table();

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["M1", "DCCMN"]);
    assert_eq!(table.len(), 36);
    assert_eq!(table.index()[0], d(2018, 1, 31));
    assert_eq!(table.index()[35], d(2020, 12, 31));
    assert_eq!(table.value(d(2018, 1, 31), "DCCMN"), None);
    assert_eq!(table.value(d(2019, 1, 31), "DCCMN"), Some(500.0));
    assert_eq!(table.value(d(2020, 12, 31), "M1"), None);
    assert_eq!(table.value(d(2020, 12, 31), "DCCMN"), Some(615.0));
}

#[tokio::test]
async fn one_entry_mapping_still_reads_into_a_table() {
    let bccr = mock_bccr();
    let req = SeriesRequest::from_json(&serde_json::json!({ "125": "M1" })).unwrap();
    let out = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap();
    let table = out.as_table().expect("mapping yields a table");
    assert_eq!(table.width(), 1);
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["M1"]);
}

#[tokio::test]
async fn unnamed_entries_take_the_table_title() {
    let bccr = mock_bccr();
    let req = SeriesRequest::from_ids([SeriesId(125), SeriesId(138)]).unwrap();
    let table = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap()
        .into_table();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec![
            "Medio circulante (M1)",
            "Depósitos en cuenta corriente en colones"
        ]
    );
}

#[tokio::test]
async fn quarterly_resample_uses_the_mean_by_default() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new().frequency(Frequency::Quarterly);
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &opts)
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.frequency(), Frequency::Quarterly);
    assert_eq!(s.len(), 10);
    assert_eq!(s.get(d(2018, 3, 31)), Some(1010.0));
    assert_eq!(s.get(d(2020, 6, 30)), Some(1280.0));
}

#[tokio::test]
async fn annual_sum_aggregates_every_month() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new()
        .frequency(Frequency::Annual)
        .aggregator(Aggregation::Sum);
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(138u32), &opts)
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.get(d(2019, 12, 31)), Some(6330.0));
    assert_eq!(s.get(d(2020, 12, 31)), Some(7050.0));
}

#[tokio::test]
async fn keeping_edges_exposes_unpublished_months() {
    let bccr = mock_builder().trim_missing_edges(false).build().unwrap();
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 36);
    assert_eq!(s.get(d(2020, 7, 31)), None);
    assert!(s.values().skip(30).all(|v| v.is_none()));
}

#[tokio::test]
async fn year_bounds_limit_the_fetched_years() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new().years(Some(2020), None).unwrap();
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &opts)
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 6);
    assert_eq!(s.points()[0].date, d(2020, 1, 31));
    assert_eq!(s.get(d(2020, 1, 31)), Some(1240.0));
}

#[tokio::test]
async fn inverted_year_bounds_are_rejected() {
    let bccr = mock_bccr();
    let mut opts = ReadOptions::new();
    opts.years.first = Some(2021);
    opts.years.last = Some(2020);
    let err = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &opts)
        .await
        .unwrap_err();
    assert!(matches!(err, BccrError::InvalidRequest(_)));
}

#[tokio::test]
async fn resampling_to_the_native_frequency_is_a_passthrough() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new().frequency(Frequency::Monthly);
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &opts)
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 30);
}
