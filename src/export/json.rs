use crate::errors::AppResult;
use crate::export::fs_utils::ensure_parent_dir;
use crate::models::Report;
use std::fs;
use std::path::Path;

/// Report payload as pretty-printed JSON.
pub(crate) fn write_report_json(path: &Path, report: &Report) -> AppResult<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
