// src/input/reader.rs

use crate::core::checks::REQUIRED_COLUMNS;
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A whole input file: trimmed header names and one `RawRow` per record.
#[derive(Debug)]
pub struct Worklog {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Read a UTF-8 work-log CSV from disk.
pub fn read_worklog(path: &Path) -> AppResult<Worklog> {
    let file = File::open(path)?;
    read_worklog_from(file)
}

/// Same as [`read_worklog`] over any reader.
///
/// - empty input / no header → `AppError::NoHeader`
/// - a column name given twice → `AppError::DuplicateColumns`
/// - header lacking date/process/operator → `AppError::MissingColumns`
/// - short records are accepted: their trailing columns are simply absent
pub fn read_worklog_from<R: Read>(reader: R) -> AppResult<Worklog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
            h.trim().to_string()
        })
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::NoHeader);
    }

    let mut duplicates: Vec<String> = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        if !h.is_empty() && headers[..i].contains(h) && !duplicates.contains(h) {
            duplicates.push(h.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(AppError::DuplicateColumns(duplicates));
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h.as_str() == **c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut row = RawRow::new(line);
        for (header, value) in headers.iter().zip(record.iter()) {
            row.push(header.as_str(), value);
        }
        rows.push(row);
    }

    Ok(Worklog { headers, rows })
}
