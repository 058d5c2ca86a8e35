use polars::prelude::*;

use crate::error::Result;

const DAY_KEY: &str = "news_day";

/// Reduces the filtered news table to one row per (symbol, calendar day):
/// the row with the latest `datetime_norm`, ties resolved to the later row in
/// the original ordering. Column set and order are unchanged from the input.
pub fn latest_per_day(df: &DataFrame) -> Result<DataFrame> {
    let deduped = df
        .clone()
        .lazy()
        .with_column(col("datetime_norm").cast(DataType::Date).alias(DAY_KEY))
        // Stable sort: rows sharing a timestamp keep their original order, so
        // last() below lands on the later original row.
        .sort(
            ["datetime_norm"],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .group_by_stable([col("related"), col(DAY_KEY)])
        .agg([all().last()])
        .collect()?;

    // Selecting the input's column names drops the internal day key and
    // restores the original column order in one pass.
    let deduped = deduped.select(df.get_column_names_owned())?;
    Ok(deduped)
}
