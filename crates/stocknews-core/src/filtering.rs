use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::error::Result;

/// Records before this date are out of scope for the downstream sentiment
/// model. Fixed by the job, not derived from the clock or the environment.
fn window_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Keeps rows on or after the window start that fall on a weekday.
///
/// Both predicates are independent, so they run as a single lazy filter. The
/// result is a fresh frame; there is no positional index to reset.
pub fn filter_window(df: &DataFrame) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(
            col("datetime_norm").dt().weekday().lt_eq(lit(5i8)),
        )
        .collect()?;

    Ok(filtered)
}
