use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

use stocknews_core::filtering::filter_window;

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn news_frame(timestamps: &[NaiveDateTime]) -> PolarsResult<DataFrame> {
    let datetime_norm = Series::new(
        "datetime_norm".into(),
        timestamps
            .iter()
            .map(|dt| dt.and_utc().timestamp_millis())
            .collect::<Vec<_>>(),
    )
    .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    DataFrame::new(vec![
        datetime_norm.into(),
        Series::new("related".into(), vec!["AAPL"; timestamps.len()]).into(),
    ])
}

#[test]
fn cutoff_is_inclusive_and_earlier_rows_drop() -> PolarsResult<()> {
    let df = news_frame(&[
        at(2023, 7, 19, 12), // Wednesday before the cutoff
        at(2023, 7, 20, 0),  // exactly the cutoff instant
        at(2023, 7, 21, 10), // Friday inside the window
    ])?;

    let filtered = filter_window(&df).unwrap();
    assert_eq!(filtered.height(), 2);

    let norm = filtered.column("datetime_norm")?.datetime()?;
    assert_eq!(
        norm.get(0),
        Some(at(2023, 7, 20, 0).and_utc().timestamp_millis())
    );

    Ok(())
}

#[test]
fn weekends_drop_entirely() -> PolarsResult<()> {
    let df = news_frame(&[
        at(2023, 7, 21, 10), // Friday
        at(2023, 7, 22, 10), // Saturday
        at(2023, 7, 23, 10), // Sunday
        at(2023, 7, 24, 9),  // Monday
    ])?;

    let filtered = filter_window(&df).unwrap();
    assert_eq!(filtered.height(), 2);

    let norm = filtered.column("datetime_norm")?.datetime()?;
    let kept: Vec<i64> = (0..filtered.height())
        .map(|idx| norm.get(idx).unwrap())
        .collect();
    assert_eq!(
        kept,
        vec![
            at(2023, 7, 21, 10).and_utc().timestamp_millis(),
            at(2023, 7, 24, 9).and_utc().timestamp_millis(),
        ]
    );

    Ok(())
}
