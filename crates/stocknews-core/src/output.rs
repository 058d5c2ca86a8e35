use polars::prelude::*;

use crate::error::Result;

/// Serializes the joined table as headered CSV bytes.
///
/// `datetime_norm` is written as `YYYY-MM-DD HH:MM:SS`; there is no
/// positional index column to suppress because the frame never had one.
pub fn csv_bytes(df: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_datetime_format(Some("%Y-%m-%d %H:%M:%S".to_string()))
        .finish(df)?;
    Ok(buffer)
}
