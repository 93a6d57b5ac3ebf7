// src/export/html.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_parent_dir;
use crate::models::Report;
use crate::utils::formatting::html_escape;
use crate::utils::mins2readable;
use std::fs;
use std::path::Path;

/// Minimal standalone page: counts plus the daily and process tables.
pub(crate) fn render_html(report: &Report) -> String {
    let mut html: Vec<String> = Vec::new();

    html.push("<!doctype html><html><head><meta charset='utf-8'>".to_string());
    html.push("<title>Worklog Report</title>".to_string());
    html.push(
        "<style>body{font-family:sans-serif}table{border-collapse:collapse}\
         th,td{border:1px solid #999;padding:4px 8px}td.num{text-align:right}</style>"
            .to_string(),
    );
    html.push("</head><body>".to_string());
    html.push("<h1>Worklog Report</h1>".to_string());
    html.push(format!(
        "<p>rows: {} / valid rows: {} / error rows: {} / total: {} ({} min)</p>",
        report.row_count,
        report.valid_count,
        report.error_count,
        mins2readable(report.total_minutes, false),
        report.total_minutes
    ));

    html.push("<h2>Daily Summary</h2>".to_string());
    html.push("<table>".to_string());
    html.push(
        "<tr><th>date</th><th>total_minutes</th><th>entry_count</th><th>process_breakdown</th></tr>"
            .to_string(),
    );
    for d in &report.daily {
        html.push(format!(
            "<tr><td>{}</td><td class='num'>{}</td><td class='num'>{}</td><td>{}</td></tr>",
            d.date_str(),
            d.total_minutes,
            d.entry_count,
            html_escape(&d.breakdown_str())
        ));
    }
    html.push("</table>".to_string());

    html.push("<h2>Process Summary</h2>".to_string());
    html.push("<table>".to_string());
    html.push(
        "<tr><th>process</th><th>total_minutes</th><th>entry_count</th><th>avg_minutes</th><th>max_minutes</th></tr>"
            .to_string(),
    );
    for p in &report.process {
        html.push(format!(
            "<tr><td>{}</td><td class='num'>{}</td><td class='num'>{}</td><td class='num'>{:.2}</td><td class='num'>{}</td></tr>",
            html_escape(&p.process),
            p.total_minutes,
            p.entry_count,
            p.average_minutes(),
            p.max_minutes
        ));
    }
    html.push("</table>".to_string());

    html.push("</body></html>".to_string());
    html.join("\n")
}

pub(crate) fn write_html(path: &Path, report: &Report) -> AppResult<()> {
    ensure_parent_dir(path)?;
    fs::write(path, render_html(report))?;
    Ok(())
}
