use chrono::NaiveDate;
use serde::Serialize;

/// Minutes spent on one process, used inside a daily row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMinutes {
    pub process: String,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummaryRow {
    pub date: NaiveDate,
    pub total_minutes: u64,
    pub entry_count: usize,
    /// Sorted by process name.
    pub process_breakdown: Vec<ProcessMinutes>,
}

impl DailySummaryRow {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// "p1=30;p2=15". `\`, `;` and `=` inside a process name are escaped
    /// with a backslash.
    pub fn breakdown_str(&self) -> String {
        self.process_breakdown
            .iter()
            .map(|p| format!("{}={}", escape_breakdown(&p.process), p.minutes))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn escape_breakdown(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | ';' | '=') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummaryRow {
    pub process: String,
    pub total_minutes: u64,
    pub entry_count: usize,
    pub max_minutes: u32,
}

impl ProcessSummaryRow {
    /// Average minutes per entry, rounded to 2 decimals. Display only.
    pub fn average_minutes(&self) -> f64 {
        if self.entry_count == 0 {
            return 0.0;
        }
        let avg = self.total_minutes as f64 / self.entry_count as f64;
        (avg * 100.0).round() / 100.0
    }
}
