use std::collections::HashSet;

use bccr::{
    Bccr, BccrError, FetchStrategy, ReadOptions, SeriesId, SeriesRequest, YearBounds,
};
use bccr_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{mock_builder, one_year_table};

#[tokio::test]
async fn concurrent_reads_keep_request_order() {
    let bccr = mock_builder()
        .fetch_strategy(FetchStrategy::Concurrent)
        .build()
        .unwrap();
    let req: SeriesRequest = "138=B;125=A".parse().unwrap();
    let table = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap()
        .into_table();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["B", "A"]);
}

#[tokio::test]
async fn sequential_fail_fast_stops_fetching_after_a_failure() {
    let (source, controller) = DynamicMockSource::new_with_controller("dynamic");
    controller
        .set_behavior(
            SeriesId(1),
            MockBehavior::Fail(BccrError::source_unavailable(SeriesId(1), "down")),
        )
        .await;
    controller
        .set_behavior(SeriesId(2), MockBehavior::Return(one_year_table("Dos", 2020, "1,0")))
        .await;
    let bccr = Bccr::builder().with_source(source).build().unwrap();

    let req = SeriesRequest::from_ids([SeriesId(1), SeriesId(2)]).unwrap();
    let err = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.series(), Some(SeriesId(1)));
    assert_eq!(
        controller.requests().await,
        vec![(SeriesId(1), YearBounds::all())]
    );
}

#[tokio::test]
async fn concurrent_fetches_every_table() {
    let (source, controller) = DynamicMockSource::new_with_controller("dynamic");
    controller
        .set_behavior(
            SeriesId(1),
            MockBehavior::Fail(BccrError::source_unavailable(SeriesId(1), "down")),
        )
        .await;
    controller
        .set_behavior(SeriesId(2), MockBehavior::Return(one_year_table("Dos", 2020, "1,0")))
        .await;
    let bccr = Bccr::builder()
        .with_source(source)
        .fetch_strategy(FetchStrategy::Concurrent)
        .build()
        .unwrap();

    let req = SeriesRequest::from_ids([SeriesId(1), SeriesId(2)]).unwrap();
    let err = bccr
        .read_year_row_month_col(&req, &ReadOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.series(), Some(SeriesId(1)));
    let fetched: HashSet<SeriesId> = controller
        .requests()
        .await
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(fetched, HashSet::from([SeriesId(1), SeriesId(2)]));
}

#[tokio::test]
async fn year_bounds_are_forwarded_to_the_source() {
    let (source, controller) = DynamicMockSource::new_with_controller("dynamic");
    controller
        .set_behavior(SeriesId(7), MockBehavior::Return(one_year_table("Siete", 2020, "2,5")))
        .await;
    let bccr = Bccr::builder().with_source(source).build().unwrap();

    let opts = ReadOptions::new().years(Some(2020), Some(2020)).unwrap();
    let s = bccr
        .read_year_row_month_col(&SeriesRequest::single(7u32), &opts)
        .await
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(s.len(), 12);
    assert!(s.values().all(|v| v == Some(2.5)));
    assert_eq!(
        controller.requests().await,
        vec![(SeriesId(7), YearBounds::new(Some(2020), Some(2020)).unwrap())]
    );
}
