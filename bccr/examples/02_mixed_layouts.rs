mod common;
use bccr::{
    Aggregation, Bccr, FailurePolicy, FetchStrategy, Layout, ReadOptions, SeriesId, SeriesSpec,
};
use common::{get_source, init_tracing, print_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Fetch concurrently and leave failing tables out instead of aborting.
    let bccr = Bccr::builder()
        .with_source(get_source())
        .fetch_strategy(FetchStrategy::Concurrent)
        .failure_policy(FailurePolicy::SkipFailed)
        .build()?;

    // 2. Monthly and annual tables in one request; 666 always fails in the mock.
    let specs = [
        SeriesSpec::new(SeriesId(125), Layout::YearRowMonthCol)
            .named("M1")
            .aggregator(Aggregation::Last),
        SeriesSpec::new(SeriesId(9), Layout::MonthRowYearCol).named("IPC"),
        SeriesSpec::new(SeriesId(230), Layout::IndicatorRowYearCol).named("Nominal_"),
        SeriesSpec::new(SeriesId(666), Layout::YearRowMonthCol).named("Broken"),
    ];

    // 3. Without a target frequency every column is aligned on the coarsest one.
    let table = bccr.read(&specs, &ReadOptions::new()).await?;
    println!("## Aligned on {} rows", table.len());
    print_table(&table);

    // 4. Titles only.
    let titles = bccr.read_titles(specs.iter().map(|s| s.id)).await?;
    println!("\n## Titles");
    for (id, t) in titles {
        println!("{id:>5}  {} ({})", t.title, t.subtitle);
    }

    Ok(())
}
