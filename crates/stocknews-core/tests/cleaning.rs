use chrono::NaiveDate;
use chrono_tz::Tz;
use polars::prelude::*;

use stocknews_core::cleaning::clean_news;
use stocknews_core::error::PipelineError;

fn raw_news() -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Series::new("datetime".into(), vec![1689854400i64, 1689940800]).into(),
        Series::new("related".into(), vec!["AAPL", "MSFT"]).into(),
        Series::new("headline".into(), vec!["midday update", "friday open"]).into(),
        Series::new("image".into(), vec!["http://img/1", "http://img/2"]).into(),
        Series::new("category".into(), vec!["company", "company"]).into(),
    ])
}

#[test]
fn drops_dead_columns_and_derives_datetime_norm() -> PolarsResult<()> {
    let cleaned = clean_news(&raw_news()?, Tz::UTC).unwrap();

    let names: Vec<&str> = cleaned
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert!(!names.contains(&"image"));
    assert!(!names.contains(&"category"));
    assert!(names.contains(&"datetime_norm"));
    // Passthrough columns survive untouched.
    assert!(names.contains(&"datetime"));
    assert!(names.contains(&"headline"));

    let norm = cleaned.column("datetime_norm")?.datetime()?;
    let expected = NaiveDate::from_ymd_opt(2023, 7, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_eq!(norm.get(0), Some(expected.and_utc().timestamp_millis()));

    Ok(())
}

#[test]
fn epoch_conversion_respects_configured_timezone() -> PolarsResult<()> {
    let tz: Tz = "America/New_York".parse().unwrap();
    let cleaned = clean_news(&raw_news()?, tz).unwrap();

    // 1689854400 is 12:00 UTC; New York is UTC-4 in July.
    let norm = cleaned.column("datetime_norm")?.datetime()?;
    let expected = NaiveDate::from_ymd_opt(2023, 7, 20)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    assert_eq!(norm.get(0), Some(expected.and_utc().timestamp_millis()));

    Ok(())
}

#[test]
fn missing_drop_column_is_an_error() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("datetime".into(), vec![1689854400i64]).into(),
        Series::new("related".into(), vec!["AAPL"]).into(),
        Series::new("category".into(), vec!["company"]).into(),
    ])?;

    let err = clean_news(&df, Tz::UTC).unwrap_err();
    assert!(matches!(err, PipelineError::Polars(_)));

    Ok(())
}

#[test]
fn null_epoch_is_reported_with_row_index() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("datetime".into(), vec![Some(1689854400i64), None]).into(),
        Series::new("related".into(), vec!["AAPL", "MSFT"]).into(),
        Series::new("image".into(), vec!["a", "b"]).into(),
        Series::new("category".into(), vec!["company", "company"]).into(),
    ])?;

    let err = clean_news(&df, Tz::UTC).unwrap_err();
    assert!(matches!(err, PipelineError::MissingTimestamp { row: 1 }));

    Ok(())
}
