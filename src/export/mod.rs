// src/export/mod.rs

mod errors_csv;
mod fs_utils;
mod html;
mod json;
mod logic;
mod model;
mod summary_csv;

pub use errors_csv::{write_errors_csv, write_file_error};
pub use logic::{ReportFiles, ReportWriter};

use crate::ui::messages::success;
use std::path::Path;

pub const ERRORS_FILE: &str = "errors.csv";
pub const DAILY_FILE: &str = "summary_daily.csv";
pub const PROCESS_FILE: &str = "summary_process.csv";
pub const HTML_FILE: &str = "report.html";
pub const JSON_FILE: &str = "report.json";

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
