//! CSV input/output.
//!
//! The input file is a trending-video export; only the `trending_date`
//! column is consumed, every other column is ignored. The output is the
//! long-format category table. The header row is always written, so an
//! empty run still produces a file with the full schema.

use std::path::Path;

use crate::error::CoreError;
use crate::types::CategoryTrendRow;

/// Name of the consumed input column.
pub const TRENDING_DATE_COLUMN: &str = "trending_date";

/// Output CSV schema, in column order.
pub const OUTPUT_COLUMNS: [&str; 4] = ["date", "category_id", "keyword", "trend_score"];

/// Reads every raw `trending_date` token from the input CSV.
///
/// Tokens are returned unparsed; callers normalize them via
/// [`crate::dates::date_window`].
///
/// # Errors
///
/// - [`CoreError::ReadInput`] if the file cannot be opened.
/// - [`CoreError::MissingColumn`] if there is no `trending_date` header.
/// - [`CoreError::Csv`] on malformed records (e.g. ragged rows).
pub fn read_trending_dates(path: &Path) -> Result<Vec<String>, CoreError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| CoreError::ReadInput {
        path: path.display().to_string(),
        source: e,
    })?;

    let headers = reader.headers()?;
    let Some(index) = headers.iter().position(|h| h == TRENDING_DATE_COLUMN) else {
        return Err(CoreError::MissingColumn(TRENDING_DATE_COLUMN));
    };

    let mut tokens = Vec::new();
    for record in reader.records() {
        let record = record?;
        tokens.push(record.get(index).unwrap_or_default().to_string());
    }
    Ok(tokens)
}

/// Writes the category table to `path`, header first, one record per row.
///
/// Output is deterministic: identical rows produce byte-identical files.
///
/// # Errors
///
/// - [`CoreError::WriteOutput`] if the file cannot be created.
/// - [`CoreError::Csv`] / [`CoreError::Io`] on write or flush failure.
pub fn write_category_trends(path: &Path, rows: &[CategoryTrendRow]) -> Result<(), CoreError> {
    // Header is written explicitly so the schema survives an empty run;
    // serde-derived headers would only appear once a first row exists.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| CoreError::WriteOutput {
            path: path.display().to_string(),
            source: e,
        })?;

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
