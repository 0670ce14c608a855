mod common;
use bccr::{Bccr, Frequency, ReadOptions, SeriesRequest};
use common::{get_source, init_tracing, print_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Setup Bccr with the fixture source.
    let bccr = Bccr::builder().with_source(get_source()).build()?;

    // 2. A bare identifier reads into one series named after its table.
    let single = bccr
        .read_year_row_month_col(&SeriesRequest::single(125u32), &ReadOptions::new())
        .await?;
    if let Some(s) = single.as_series() {
        println!("## {} ({} months)", s.name, s.series.len());
    }

    // 3. A mapping reads into a table; resample to quarters on the way.
    let request: SeriesRequest = "125=M1;138=DCCMN".parse()?;
    let opts = ReadOptions::new().frequency(Frequency::Quarterly);
    let table = bccr
        .read_year_row_month_col(&request, &opts)
        .await?
        .into_table();
    println!("\n## Quarterly means");
    print_table(&table);

    // 4. Indicator tables: the name is a prefix for every indicator row.
    let request: SeriesRequest = "189=Real_".parse()?;
    let table = bccr
        .read_indicator_row_year_col(&request, &ReadOptions::new())
        .await?;
    println!("\n## Real GDP by activity");
    print_table(&table);

    Ok(())
}
