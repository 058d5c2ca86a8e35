// crates/stocknews-core/src/pipeline.rs

use bytes::Bytes;
use stocknews_bucket::BucketStore;
use tracing::info;

use crate::cleaning;
use crate::config::JobConfig;
use crate::dedup;
use crate::error::Result;
use crate::filtering;
use crate::joining;
use crate::loading;
use crate::output;

pub const NEWS_KEY: &str = "stocks_news.csv";
pub const HIST_KEY: &str = "stocks_hist.csv";
pub const OUTPUT_KEY: &str = "processed_stocks_news.csv";

/// Row counts observed at each stage boundary of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub raw_news_rows: usize,
    pub cleaned_rows: usize,
    pub filtered_rows: usize,
    pub deduplicated_rows: usize,
    pub joined_rows: usize,
}

/// Runs the whole job: load, clean, filter, deduplicate, join, write.
///
/// Stages hand their output frame forward wholesale; nothing is persisted
/// until the final `put`, so a failure at any stage leaves the destination
/// untouched and the run can simply be retried from the start.
pub async fn run(store: &dyn BucketStore, config: &JobConfig) -> Result<RunSummary> {
    let inputs = loading::fetch_inputs(store, config).await?;
    let raw_news_rows = inputs.news.height();

    let cleaned = cleaning::clean_news(&inputs.news, config.timezone)?;
    info!(rows = cleaned.height(), "news table cleaned");

    let filtered = filtering::filter_window(&cleaned)?;
    info!(rows = filtered.height(), "temporal filter applied");

    let deduplicated = dedup::latest_per_day(&filtered)?;
    info!(rows = deduplicated.height(), "one headline kept per symbol-day");

    let mut joined = joining::join_prices(&deduplicated, &inputs.prices)?;
    info!(rows = joined.height(), "news joined against price history");

    let bytes = output::csv_bytes(&mut joined)?;
    store
        .put_object(
            &config.destination_bucket,
            OUTPUT_KEY,
            Bytes::from(bytes),
            "text/csv",
        )
        .await?;
    info!(key = OUTPUT_KEY, "merged table written to destination bucket");

    Ok(RunSummary {
        raw_news_rows,
        cleaned_rows: cleaned.height(),
        filtered_rows: filtered.height(),
        deduplicated_rows: deduplicated.height(),
        joined_rows: joined.height(),
    })
}
