use csv::ReaderBuilder;

use crate::error::{PipelineError, Result};

/// Columns the news feed must carry before cleaning can run.
pub const NEWS_REQUIRED: [&str; 4] = ["datetime", "related", "image", "category"];

/// Columns the price history must carry for the join.
pub const PRICE_REQUIRED: [&str; 2] = ["Date", "ticker"];

/// Checks the header row of a raw CSV payload for the expected column names.
///
/// Runs immediately after load so a malformed upload fails with a column name
/// in the message instead of surfacing mid-pipeline from an unrelated
/// operation. Any additional columns are allowed and pass through untouched.
pub fn validate_header(
    bytes: &[u8],
    table: &'static str,
    required: &'static [&'static str],
) -> Result<()> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let header = reader
        .records()
        .next()
        .ok_or(PipelineError::MissingColumn {
            table,
            column: required[0],
        })??;

    for &column in required {
        if !header.iter().any(|field| field.trim() == column) {
            return Err(PipelineError::MissingColumn { table, column });
        }
    }

    Ok(())
}
