use std::sync::Arc;

use bccr::TableSource;

#[must_use]
pub fn get_source() -> Arc<dyn TableSource> {
    println!("--- (Using fixture tables from bccr-mock) ---");
    Arc::new(bccr_mock::MockTableSource::new())
}

/// Log to stderr; `RUST_LOG=bccr=info` shows download info.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn print_table(table: &bccr::CanonicalTable) {
    print!("{:<12}", "date");
    for name in table.names() {
        print!(" | {name:>24}");
    }
    println!();
    for (date, values) in table.rows() {
        print!("{date:<12}");
        for v in values {
            match v {
                Some(v) => print!(" | {v:>24.2}"),
                None => print!(" | {:>24}", "-"),
            }
        }
        println!();
    }
}
