use crate::core::checks::{self, CheckResult};
use crate::core::options::ParseOptions;
use crate::models::{RawRow, ValidationError, WorkEntry};

/// Turn one raw row into a `WorkEntry`, or the first failing check.
pub fn parse_row(row: &RawRow, options: &ParseOptions) -> Result<WorkEntry, ValidationError> {
    build_entry(row, options).map_err(|(reason, detail)| ValidationError::new(reason, detail, row))
}

fn build_entry(row: &RawRow, options: &ParseOptions) -> CheckResult<WorkEntry> {
    checks::check_required(row)?;
    let date = checks::check_date(row)?;
    let minutes = checks::resolve_minutes(row, options)?;

    Ok(WorkEntry {
        date,
        process: row.value("process").to_string(),
        operator: row.value("operator").to_string(),
        minutes,
        note: row.value("note").to_string(),
    })
}
