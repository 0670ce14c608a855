use bccr::{
    Aggregation, BccrError, Frequency, Layout, ReadOptions, SeriesId, SeriesSpec,
};

use crate::helpers::{d, mock_bccr};

#[tokio::test]
async fn mixed_frequencies_align_on_the_coarsest() {
    let bccr = mock_bccr();
    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol).named("M1"),
        SeriesSpec::new(SeriesId(189), Layout::IndicatorRowYearCol).named("Real_"),
    ];
    let table = bccr.read(&specs, &ReadOptions::new()).await.unwrap();

    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec!["M1", "Real_Agricultura", "Real_Industria", "Real_Servicios"]
    );
    assert_eq!(
        table.index(),
        &[d(2018, 12, 31), d(2019, 12, 31), d(2020, 12, 31)]
    );
    assert_eq!(table.column("M1").unwrap().frequency, Frequency::Annual);
    assert_eq!(table.value(d(2018, 12, 31), "M1"), Some(1055.0));
    assert_eq!(table.value(d(2019, 12, 31), "M1"), Some(1175.0));
    // Only January to June 2020 are published.
    assert_eq!(table.value(d(2020, 12, 31), "M1"), Some(1265.0));
    assert_eq!(table.value(d(2020, 12, 31), "Real_Agricultura"), Some(102.0));
}

#[tokio::test]
async fn per_spec_aggregation_overrides_the_call_default() {
    let bccr = mock_bccr();
    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol)
            .named("M1")
            .aggregator(Aggregation::Sum),
        SeriesSpec::new(SeriesId(138), Layout::YearRowMonthCol).named("DCC"),
    ];
    let opts = ReadOptions::new().frequency(Frequency::Annual);
    let table = bccr.read(&specs, &opts).await.unwrap();

    assert_eq!(table.value(d(2018, 12, 31), "M1"), Some(12660.0));
    assert_eq!(table.value(d(2018, 12, 31), "DCC"), None);
    assert_eq!(table.value(d(2019, 12, 31), "DCC"), Some(527.5));
}

#[tokio::test]
async fn call_aggregation_applies_when_aligning_mixed_frequencies() {
    let bccr = mock_bccr();
    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol).named("M1"),
        SeriesSpec::new(SeriesId(230), Layout::IndicatorRowYearCol),
    ];
    let opts = ReadOptions::new().aggregator(Aggregation::Last);
    let table = bccr.read(&specs, &opts).await.unwrap();

    assert_eq!(table.value(d(2018, 12, 31), "M1"), Some(1110.0));
    assert_eq!(table.value(d(2018, 12, 31), "Agricultura"), Some(150.0));
}

#[tokio::test]
async fn same_native_frequency_is_left_untouched() {
    let bccr = mock_bccr();
    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol).named("M1"),
        SeriesSpec::new(SeriesId(9), Layout::MonthRowYearCol).named("IPC"),
    ];
    let table = bccr.read(&specs, &ReadOptions::new()).await.unwrap();

    assert_eq!(table.len(), 36);
    assert_eq!(table.column("IPC").unwrap().frequency, Frequency::Monthly);
    assert_eq!(table.value(d(2019, 1, 31), "IPC"), Some(100.0));
    assert_eq!(table.value(d(2018, 1, 31), "IPC"), None);
}

#[tokio::test]
async fn empty_or_repeated_specs_are_rejected() {
    let bccr = mock_bccr();
    let err = bccr.read(&[], &ReadOptions::new()).await.unwrap_err();
    assert!(matches!(err, BccrError::InvalidRequest(_)));

    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol),
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol).named("again"),
    ];
    let err = bccr.read(&specs, &ReadOptions::new()).await.unwrap_err();
    assert!(matches!(err, BccrError::InvalidRequest(_)));
}
