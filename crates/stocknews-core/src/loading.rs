use std::io::Cursor;

use polars::prelude::*;
use stocknews_bucket::BucketStore;
use tracing::info;

use crate::config::JobConfig;
use crate::error::{PipelineError, Result};
use crate::pipeline::{HIST_KEY, NEWS_KEY};
use crate::schema;

/// The two raw tables one run consumes.
pub struct RawInputs {
    pub news: DataFrame,
    pub prices: DataFrame,
}

/// Verifies both input objects exist, fetches them, and parses each as a
/// headered CSV. The existence gate runs for both keys before any read is
/// attempted; a missing object aborts the run before any parsing happens.
pub async fn fetch_inputs(store: &dyn BucketStore, config: &JobConfig) -> Result<RawInputs> {
    for key in [NEWS_KEY, HIST_KEY] {
        if !store.exists(&config.source_bucket, key).await? {
            return Err(PipelineError::MissingInput { key });
        }
    }

    let news_bytes = store.get_object(&config.source_bucket, NEWS_KEY).await?;
    let hist_bytes = store.get_object(&config.source_bucket, HIST_KEY).await?;

    schema::validate_header(&news_bytes, "news", &schema::NEWS_REQUIRED)?;
    schema::validate_header(&hist_bytes, "price history", &schema::PRICE_REQUIRED)?;

    let news = read_csv(&news_bytes)?;
    let prices = read_csv(&hist_bytes)?;

    info!(
        news_rows = news.height(),
        price_rows = prices.height(),
        "input tables loaded"
    );

    Ok(RawInputs { news, prices })
}

/// Parses an in-memory CSV payload into a DataFrame.
pub fn read_csv(bytes: &[u8]) -> Result<DataFrame> {
    let cursor = Cursor::new(bytes);
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(cursor)
        .finish()?;
    Ok(df)
}
