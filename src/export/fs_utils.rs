// src/export/fs_utils.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Create the parent directory of `path` if needed.
pub(crate) fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `records` as CSV under an explicit header, so that an empty table
/// still produces a file with its header line.
pub(crate) fn write_csv<T: Serialize>(path: &Path, headers: &[&str], records: &[T]) -> AppResult<()> {
    ensure_parent_dir(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(headers)?;
    for item in records {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
