use std::time::Duration;

use bccr::{Bccr, BccrError, FailurePolicy, ReadOptions, SeriesId, SeriesRequest};
use bccr_mock::{DynamicMockSource, MockBehavior, SLOW_ID};

use crate::helpers::mock_builder;

#[tokio::test]
async fn slow_source_times_out_as_unavailable() {
    let bccr = mock_builder()
        .source_timeout(Some(Duration::from_millis(50)))
        .build()
        .unwrap();
    let err = bccr
        .read_year_row_month_col(&SeriesRequest::single(SLOW_ID), &ReadOptions::new())
        .await
        .unwrap_err();
    match err {
        BccrError::SourceUnavailable { series, msg } => {
            assert_eq!(series, SLOW_ID);
            assert!(msg.contains("timed out"), "msg: {msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn timed_out_series_is_skipped_under_skip_failed() {
    let bccr = mock_builder()
        .source_timeout(Some(Duration::from_millis(50)))
        .failure_policy(FailurePolicy::SkipFailed)
        .build()
        .unwrap();
    let req: SeriesRequest = "125=M1;999=Slow".parse().unwrap();
    let table = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap()
        .into_table();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["M1"]);
}

#[tokio::test(start_paused = true)]
async fn hanging_source_is_bounded_by_the_timeout() {
    let (source, controller) = DynamicMockSource::new_with_controller("hanging");
    controller.set_behavior(SeriesId(5), MockBehavior::Hang).await;
    let bccr = Bccr::builder()
        .with_source(source)
        .source_timeout(Some(Duration::from_secs(30)))
        .build()
        .unwrap();

    let err = bccr
        .read_year_row_month_col(&SeriesRequest::single(5u32), &ReadOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.series(), Some(SeriesId(5)));
}
