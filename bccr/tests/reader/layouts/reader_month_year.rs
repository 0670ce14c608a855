use bccr::{BccrError, Layout, ReadOptions, SeriesId, SeriesRequest};

use crate::helpers::{d, mock_bccr};

#[tokio::test]
async fn months_down_years_across_read_in_chronological_order() {
    let bccr = mock_bccr();
    let s = bccr
        .read_month_row_year_col(&SeriesRequest::single(9u32), &ReadOptions::new())
        .await
        .unwrap()
        .into_series()
        .unwrap();

    assert_eq!(s.len(), 24);
    assert_eq!(s.get(d(2019, 1, 31)), Some(100.0));
    assert_eq!(s.get(d(2019, 2, 28)), Some(100.5));
    assert_eq!(s.get(d(2020, 1, 31)), Some(106.0));
    assert_eq!(s.get(d(2020, 12, 31)), Some(111.5));
    let dates: Vec<_> = s.dates().collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn total_row_never_reaches_the_series() {
    let bccr = mock_bccr();
    let s = bccr
        .read_month_row_year_col(&SeriesRequest::single(289u32), &ReadOptions::new())
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 24);
    let max = s.values().flatten().fold(f64::MIN, f64::max);
    assert_eq!(max, 223.0);
}

#[tokio::test]
async fn colliding_names_are_suffixed_with_the_identifier() {
    let bccr = mock_bccr();
    let req =
        SeriesRequest::mapping([(SeriesId(9), Some("IPC")), (SeriesId(289), Some("IPC"))]).unwrap();
    let table = bccr
        .read_month_row_year_col(&req, &ReadOptions::new())
        .await
        .unwrap()
        .into_table();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["IPC", "IPC_289"]);
    assert_eq!(table.value(d(2019, 1, 31), "IPC_289"), Some(200.0));
}

#[tokio::test]
async fn year_month_table_is_not_a_month_year_table() {
    let bccr = mock_bccr();
    let err = bccr
        .read_month_row_year_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await
        .unwrap_err();
    match err {
        BccrError::UnrecognizedLayout { layout, .. } => {
            assert_eq!(layout, Layout::MonthRowYearCol);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
