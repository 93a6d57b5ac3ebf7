// src/export/summary_csv.rs

use crate::errors::AppResult;
use crate::export::fs_utils::write_csv;
use crate::export::model::{DailyRecord, ProcessRecord};
use crate::models::{DailySummaryRow, ProcessSummaryRow};
use std::path::Path;

pub(crate) fn write_daily_csv(path: &Path, rows: &[DailySummaryRow]) -> AppResult<()> {
    let records: Vec<DailyRecord> = rows.iter().map(DailyRecord::from).collect();
    write_csv(path, &DailyRecord::HEADERS, &records)
}

pub(crate) fn write_process_csv(path: &Path, rows: &[ProcessSummaryRow]) -> AppResult<()> {
    let records: Vec<ProcessRecord> = rows.iter().map(ProcessRecord::from).collect();
    write_csv(path, &ProcessRecord::HEADERS, &records)
}
