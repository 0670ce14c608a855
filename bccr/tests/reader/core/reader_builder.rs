use std::sync::Arc;
use std::time::Duration;

use bccr::{
    Bccr, BccrConfig, BccrError, FailurePolicy, FetchStrategy, Layout, LocaleMatcher,
    ReadOptions, SeriesRequest,
};
use bccr_mock::MockTableSource;

use crate::helpers::mock_builder;

#[test]
fn building_without_a_source_is_rejected() {
    let err = Bccr::builder().build().err().unwrap();
    assert!(matches!(err, BccrError::InvalidRequest(_)));
}

#[test]
fn defaults_match_the_documented_configuration() {
    let bccr = mock_builder().build().unwrap();
    let cfg = bccr.config();
    assert_eq!(cfg.failure_policy, FailurePolicy::FailFast);
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Sequential);
    assert_eq!(cfg.source_timeout, Some(Duration::from_secs(30)));
    assert!(cfg.trim_missing_edges);
    assert!(cfg.quiet);
}

#[test]
fn whole_config_can_be_replaced() {
    let cfg = BccrConfig {
        failure_policy: FailurePolicy::SkipFailed,
        fetch_strategy: FetchStrategy::Concurrent,
        source_timeout: None,
        trim_missing_edges: false,
        quiet: false,
    };
    let bccr = Bccr::builder()
        .with_source(Arc::new(MockTableSource::new()))
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(bccr.config().failure_policy, FailurePolicy::SkipFailed);
    assert_eq!(bccr.config().source_timeout, None);
    assert!(!bccr.config().quiet);
}

#[tokio::test]
async fn matcher_decides_which_month_token_anchors_the_table() {
    let bccr = mock_builder()
        .matcher(Arc::new(LocaleMatcher::english()))
        .build()
        .unwrap();
    let err = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BccrError::UnrecognizedLayout {
            layout: Layout::YearRowMonthCol,
            ..
        }
    ));
}

#[tokio::test]
async fn quiet_override_does_not_change_the_result() {
    let bccr = mock_builder().quiet(true).build().unwrap();
    let loud = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new().quiet(false))
        .await
        .unwrap();
    let quiet = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await
        .unwrap();
    assert_eq!(loud, quiet);
}
