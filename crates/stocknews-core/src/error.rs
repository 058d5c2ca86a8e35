// crates/stocknews-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("required object '{key}' not found in the source bucket")]
    MissingInput { key: &'static str },

    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("news row {row} has a missing or unreadable epoch timestamp")]
    MissingTimestamp { row: usize },

    #[error("epoch timestamp {value} is out of range for the configured time zone")]
    Timestamp { value: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Bucket(#[from] stocknews_bucket::BucketError),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
