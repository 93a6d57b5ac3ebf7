use chrono::NaiveDate;
use serde::Serialize;

/// A validated, normalized unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub date: NaiveDate,
    pub process: String,
    pub operator: String,
    pub minutes: u32,
    pub note: String,
}
