use bccr::{BccrError, Frequency, ReadOptions, SeriesId, SeriesRequest};

use crate::helpers::{d, mock_bccr};

#[tokio::test]
async fn names_prefix_each_indicator() {
    let bccr = mock_bccr();
    let req = SeriesRequest::mapping([
        (SeriesId(189), Some("Real_")),
        (SeriesId(230), Some("Nominal_")),
    ])
    .unwrap();
    let table = bccr
        .read_indicator_row_year_col(&req, &ReadOptions::new())
        .await
        .unwrap();

    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec![
            "Real_Agricultura",
            "Real_Industria",
            "Real_Servicios",
            "Nominal_Agricultura",
            "Nominal_Industria",
            "Nominal_Servicios",
        ]
    );
    assert_eq!(
        table.index(),
        &[d(2018, 12, 31), d(2019, 12, 31), d(2020, 12, 31)]
    );
    assert_eq!(table.value(d(2018, 12, 31), "Real_Agricultura"), Some(100.0));
    assert_eq!(table.value(d(2019, 12, 31), "Nominal_Industria"), Some(453.0));
    assert_eq!(table.value(d(2020, 12, 31), "Real_Servicios"), Some(606.0));
}

#[tokio::test]
async fn unnamed_single_read_adds_no_prefix_and_drops_headings() {
    let bccr = mock_bccr();
    let table = bccr
        .read_indicator_row_year_col(&SeriesRequest::single(189u32), &ReadOptions::new())
        .await
        .unwrap();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec!["Agricultura", "Industria", "Servicios"]
    );
    assert!(table.column("Producción").is_none());
    let col = table.column("Industria").unwrap();
    assert_eq!(col.frequency, Frequency::Annual);
    assert_eq!(col.values, vec![Some(300.0), Some(302.0), Some(304.0)]);
}

#[tokio::test]
async fn annual_tables_cannot_be_resampled_to_months() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new().frequency(Frequency::Monthly);
    let err = bccr
        .read_indicator_row_year_col(&SeriesRequest::single(189u32), &opts)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BccrError::UnsupportedFrequency {
            native: Frequency::Annual,
            target: Frequency::Monthly,
        }
    ));
}

#[tokio::test]
async fn year_bounds_apply_to_indicator_tables() {
    let bccr = mock_bccr();
    let opts = ReadOptions::new().years(Some(2019), Some(2019)).unwrap();
    let table = bccr
        .read_indicator_row_year_col(&SeriesRequest::single(230u32), &opts)
        .await
        .unwrap();
    assert_eq!(table.index(), &[d(2019, 12, 31)]);
    assert_eq!(table.value(d(2019, 12, 31), "Servicios"), Some(904.5));
}
