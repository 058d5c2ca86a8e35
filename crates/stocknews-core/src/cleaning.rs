use chrono::TimeZone;
use chrono_tz::Tz;
use polars::prelude::*;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Drops the columns that carry no downstream value and derives
/// `datetime_norm` from the raw epoch field.
///
/// Each `datetime` value is interpreted as UNIX epoch seconds, converted to
/// wall-clock time in `tz`, and materialized as a naive datetime column at
/// second precision. All other columns pass through untouched.
pub fn clean_news(df: &DataFrame, tz: Tz) -> Result<DataFrame> {
    log_null_counts(df);

    let cleaned = df.drop("image")?.drop("category")?;

    let epochs = cleaned.column("datetime")?.cast(&DataType::Int64)?;
    let epochs = epochs.i64()?;

    let mut normalized: Vec<i64> = Vec::with_capacity(cleaned.height());
    for row in 0..cleaned.height() {
        let epoch = epochs
            .get(row)
            .ok_or(PipelineError::MissingTimestamp { row })?;
        let local = tz
            .timestamp_opt(epoch, 0)
            .single()
            .ok_or(PipelineError::Timestamp { value: epoch })?
            .naive_local();
        normalized.push(local.and_utc().timestamp_millis());
    }

    let datetime_norm = Series::new("datetime_norm".into(), normalized)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let mut cleaned = cleaned;
    cleaned.hstack_mut(&[datetime_norm.into()])?;

    log_symbol_coverage(&cleaned)?;

    Ok(cleaned)
}

fn log_null_counts(df: &DataFrame) {
    for column in df.get_columns() {
        let nulls = column.null_count();
        if nulls > 0 {
            debug!(column = column.name().as_str(), nulls, "null values in raw news column");
        }
    }
}

/// First and last normalized timestamp per symbol, at debug level.
fn log_symbol_coverage(df: &DataFrame) -> Result<()> {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return Ok(());
    }

    let coverage = df
        .clone()
        .lazy()
        .group_by_stable([col("related")])
        .agg([
            col("datetime_norm").min().alias("first"),
            col("datetime_norm").max().alias("last"),
        ])
        .collect()?;

    debug!(%coverage, "datetime_norm coverage per symbol");
    Ok(())
}
