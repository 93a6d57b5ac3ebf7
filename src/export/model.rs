// src/export/model.rs

use crate::models::{DailySummaryRow, ProcessSummaryRow, ValidationError};
use serde::Serialize;

/// One line of errors.csv.
#[derive(Serialize, Clone, Debug)]
pub struct ErrorRecord {
    pub line_number: u64,
    pub reason_code: String,
    pub detail: String,
    pub raw: String,
}

impl ErrorRecord {
    pub(crate) const HEADERS: [&'static str; 4] = ["line_number", "reason_code", "detail", "raw"];

    /// Record for a failure of the whole input file (line 0).
    pub fn file_error(message: &str, input: &str) -> Self {
        let raw = serde_json::json!({ "input": input }).to_string();
        Self {
            line_number: 0,
            reason_code: "FILE_ERROR".to_string(),
            detail: message.to_string(),
            raw,
        }
    }
}

impl From<&ValidationError> for ErrorRecord {
    fn from(e: &ValidationError) -> Self {
        Self {
            line_number: e.line_number,
            reason_code: e.reason.as_str().to_string(),
            detail: e.detail.clone(),
            raw: e.raw_row.to_json(),
        }
    }
}

/// One line of summary_daily.csv.
#[derive(Serialize, Clone, Debug)]
pub struct DailyRecord {
    pub date: String,
    pub total_minutes: u64,
    pub entry_count: usize,
    pub process_breakdown: String,
}

impl DailyRecord {
    pub(crate) const HEADERS: [&'static str; 4] =
        ["date", "total_minutes", "entry_count", "process_breakdown"];
}

impl From<&DailySummaryRow> for DailyRecord {
    fn from(r: &DailySummaryRow) -> Self {
        Self {
            date: r.date_str(),
            total_minutes: r.total_minutes,
            entry_count: r.entry_count,
            process_breakdown: r.breakdown_str(),
        }
    }
}

/// One line of summary_process.csv.
#[derive(Serialize, Clone, Debug)]
pub struct ProcessRecord {
    pub process: String,
    pub total_minutes: u64,
    pub entry_count: usize,
    pub avg_minutes: f64,
    pub max_minutes: u32,
}

impl ProcessRecord {
    pub(crate) const HEADERS: [&'static str; 5] = [
        "process",
        "total_minutes",
        "entry_count",
        "avg_minutes",
        "max_minutes",
    ];
}

impl From<&ProcessSummaryRow> for ProcessRecord {
    fn from(r: &ProcessSummaryRow) -> Self {
        Self {
            process: r.process.clone(),
            total_minutes: r.total_minutes,
            entry_count: r.entry_count,
            avg_minutes: r.average_minutes(),
            max_minutes: r.max_minutes,
        }
    }
}
