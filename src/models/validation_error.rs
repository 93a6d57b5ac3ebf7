use super::{RawRow, ReasonCode};

/// A rejected row: where it was, why, and the row itself for audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub line_number: u64,
    pub reason: ReasonCode,
    /// Human-readable hint (e.g. which columns are blank). Never affects `reason`.
    pub detail: String,
    pub raw_row: RawRow,
}

impl ValidationError {
    pub fn new(reason: ReasonCode, detail: impl Into<String>, raw_row: &RawRow) -> Self {
        Self {
            line_number: raw_row.line_number,
            reason,
            detail: detail.into(),
            raw_row: raw_row.clone(),
        }
    }
}
