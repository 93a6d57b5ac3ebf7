//! Drives the row parser over a whole file and hands the valid entries to
//! the aggregator. A rejected row is an ordinary outcome, never a failure.

use crate::core::aggregator::aggregate;
use crate::core::options::ParseOptions;
use crate::core::parser::parse_row;
use crate::models::{
    DailySummaryRow, ProcessSummaryRow, RawRow, Report, ValidationError, WorkEntry,
};

/// Rows split into accepted entries and rejections, both in input order.
#[derive(Debug, Default)]
pub struct Partition {
    pub entries: Vec<WorkEntry>,
    pub errors: Vec<ValidationError>,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub row_count: usize,
    pub entries: Vec<WorkEntry>,
    pub errors: Vec<ValidationError>,
    pub daily: Vec<DailySummaryRow>,
    pub process: Vec<ProcessSummaryRow>,
}

impl BuildOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn report(&self) -> Report {
        Report {
            row_count: self.row_count,
            valid_count: self.entries.len(),
            error_count: self.errors.len(),
            total_minutes: self.entries.iter().map(|e| u64::from(e.minutes)).sum(),
            daily: self.daily.clone(),
            process: self.process.clone(),
        }
    }
}

pub struct Pipeline {
    options: ParseOptions,
}

impl Pipeline {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn partition(&self, rows: &[RawRow]) -> Partition {
        let mut out = Partition::default();
        for row in rows {
            match parse_row(row, &self.options) {
                Ok(entry) => out.entries.push(entry),
                Err(err) => out.errors.push(err),
            }
        }
        out
    }

    pub fn validate(&self, rows: &[RawRow]) -> Vec<ValidationError> {
        self.partition(rows).errors
    }

    /// Summaries of the valid subset plus every rejection. Never fails.
    pub fn build(&self, rows: &[RawRow]) -> BuildOutcome {
        let Partition { entries, errors } = self.partition(rows);
        let (daily, process) = aggregate(&entries);

        BuildOutcome {
            row_count: rows.len(),
            entries,
            errors,
            daily,
            process,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
