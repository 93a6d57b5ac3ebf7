// src/export/errors_csv.rs

use crate::errors::AppResult;
use crate::export::fs_utils::write_csv;
use crate::export::model::ErrorRecord;
use crate::models::ValidationError;
use std::path::Path;

/// Write every rejected row, in input order. An empty list still writes the header.
pub fn write_errors_csv(path: &Path, errors: &[ValidationError]) -> AppResult<()> {
    let records: Vec<ErrorRecord> = errors.iter().map(ErrorRecord::from).collect();
    write_csv(path, &ErrorRecord::HEADERS, &records)
}

/// Write a single FILE_ERROR record, used when the input cannot be read at all.
pub fn write_file_error(path: &Path, message: &str, input: &str) -> AppResult<()> {
    write_csv(
        path,
        &ErrorRecord::HEADERS,
        &[ErrorRecord::file_error(message, input)],
    )
}
