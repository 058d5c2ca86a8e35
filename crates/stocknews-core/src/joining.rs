use std::collections::HashSet;

use polars::prelude::*;
use tracing::warn;

use crate::error::Result;

const DAY_KEY: &str = "news_day";

/// Inner-joins the deduplicated news table against the price history on
/// (symbol, calendar day).
///
/// `datetime_norm` keeps its full second precision in the output; the
/// day-precision key exists only for the join and is dropped afterwards. The
/// price side's `Date` and `ticker` key columns do not survive the join, so
/// `datetime_norm` and `related` remain the canonical keys in the output.
pub fn join_prices(news: &DataFrame, prices: &DataFrame) -> Result<DataFrame> {
    let news_keyed = news
        .clone()
        .lazy()
        .with_column(col("datetime_norm").cast(DataType::Date).alias(DAY_KEY));

    let prices_keyed = prices.clone().lazy().with_column(
        col("Date")
            .str()
            .to_date(StrptimeOptions {
                format: Some("%Y-%m-%d".into()),
                ..Default::default()
            })
            .alias("Date"),
    );

    let joined = news_keyed
        .join(
            prices_keyed,
            [col("related"), col(DAY_KEY)],
            [col("ticker"), col("Date")],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;

    warn_on_fanout(&joined)?;

    let joined = joined.drop(DAY_KEY)?;
    Ok(joined)
}

/// The price history is assumed pre-deduplicated upstream; duplicate
/// (ticker, Date) rows fan the join out into repeated (symbol, day) pairs.
/// That input defect is surfaced here, not repaired.
fn warn_on_fanout(joined: &DataFrame) -> Result<()> {
    let symbols = joined.column("related")?.str()?;
    let days = joined.column(DAY_KEY)?.date()?;

    let mut seen: HashSet<(String, i32)> = HashSet::with_capacity(joined.height());
    let mut duplicates = 0usize;
    for idx in 0..joined.height() {
        if let (Some(symbol), Some(day)) = (symbols.get(idx), days.get(idx)) {
            if !seen.insert((symbol.to_string(), day)) {
                duplicates += 1;
            }
        }
    }

    if duplicates > 0 {
        warn!(
            rows = duplicates,
            "duplicate (ticker, Date) keys in price history fanned out the join"
        );
    }

    Ok(())
}
