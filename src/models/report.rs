use super::{DailySummaryRow, ProcessSummaryRow};
use serde::Serialize;

/// Everything the HTML/JSON report needs.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub row_count: usize,
    pub valid_count: usize,
    pub error_count: usize,
    pub total_minutes: u64,
    pub daily: Vec<DailySummaryRow>,
    pub process: Vec<ProcessSummaryRow>,
}
