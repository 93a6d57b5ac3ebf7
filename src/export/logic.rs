// src/export/logic.rs

use crate::core::BuildOutcome;
use crate::errors::AppResult;
use crate::export::errors_csv::write_errors_csv;
use crate::export::html::write_html;
use crate::export::json::write_report_json;
use crate::export::summary_csv::{write_daily_csv, write_process_csv};
use crate::export::{
    DAILY_FILE, ERRORS_FILE, HTML_FILE, JSON_FILE, PROCESS_FILE, notify_export_success,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of everything a build wrote.
#[derive(Debug, Clone)]
pub struct ReportFiles {
    pub errors: PathBuf,
    pub daily: PathBuf,
    pub process: PathBuf,
    pub html: PathBuf,
    pub json: Option<PathBuf>,
}

impl ReportFiles {
    pub fn all(&self) -> Vec<&Path> {
        let mut out = vec![
            self.errors.as_path(),
            self.daily.as_path(),
            self.process.as_path(),
            self.html.as_path(),
        ];
        if let Some(j) = &self.json {
            out.push(j.as_path());
        }
        out
    }
}

/// Writes the outputs of a build into one directory.
pub struct ReportWriter;

impl ReportWriter {
    /// Error report and summaries are always written, even when empty.
    pub fn write_all(out_dir: &Path, outcome: &BuildOutcome, json: bool) -> AppResult<ReportFiles> {
        fs::create_dir_all(out_dir)?;

        let files = ReportFiles {
            errors: out_dir.join(ERRORS_FILE),
            daily: out_dir.join(DAILY_FILE),
            process: out_dir.join(PROCESS_FILE),
            html: out_dir.join(HTML_FILE),
            json: json.then(|| out_dir.join(JSON_FILE)),
        };

        let report = outcome.report();

        write_errors_csv(&files.errors, &outcome.errors)?;
        notify_export_success("Error report", &files.errors);

        write_daily_csv(&files.daily, &outcome.daily)?;
        notify_export_success("Daily summary", &files.daily);

        write_process_csv(&files.process, &outcome.process)?;
        notify_export_success("Process summary", &files.process);

        write_html(&files.html, &report)?;
        notify_export_success("HTML report", &files.html);

        if let Some(path) = &files.json {
            write_report_json(path, &report)?;
            notify_export_success("JSON report", path);
        }

        Ok(files)
    }
}
