//! Daily and per-process totals.

use crate::models::{DailySummaryRow, ProcessMinutes, ProcessSummaryRow, WorkEntry};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
struct Totals {
    minutes: u64,
    count: usize,
    max: u32,
}

impl Totals {
    fn add(&mut self, minutes: u32) {
        self.minutes += u64::from(minutes);
        self.count += 1;
        self.max = self.max.max(minutes);
    }
}

#[derive(Debug, Default)]
struct DayTotals {
    totals: Totals,
    by_process: BTreeMap<String, u64>,
}

/// Single-pass reducer. Feed entries in any order, then `finish`.
#[derive(Debug, Default)]
pub struct Aggregator {
    daily: BTreeMap<NaiveDate, DayTotals>,
    process: HashMap<String, Totals>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: &WorkEntry) {
        let day = self.daily.entry(entry.date).or_default();
        day.totals.add(entry.minutes);
        *day.by_process.entry(entry.process.clone()).or_insert(0) += u64::from(entry.minutes);

        self.process
            .entry(entry.process.clone())
            .or_default()
            .add(entry.minutes);
    }

    /// Daily rows by date ascending; process rows by total minutes descending,
    /// then process name ascending.
    pub fn finish(self) -> (Vec<DailySummaryRow>, Vec<ProcessSummaryRow>) {
        let daily = self
            .daily
            .into_iter()
            .map(|(date, day)| DailySummaryRow {
                date,
                total_minutes: day.totals.minutes,
                entry_count: day.totals.count,
                process_breakdown: day
                    .by_process
                    .into_iter()
                    .map(|(process, minutes)| ProcessMinutes { process, minutes })
                    .collect(),
            })
            .collect();

        let mut process: Vec<ProcessSummaryRow> = self
            .process
            .into_iter()
            .map(|(process, t)| ProcessSummaryRow {
                process,
                total_minutes: t.minutes,
                entry_count: t.count,
                max_minutes: t.max,
            })
            .collect();

        process.sort_by(|a, b| {
            b.total_minutes
                .cmp(&a.total_minutes)
                .then_with(|| a.process.cmp(&b.process))
        });

        (daily, process)
    }
}

pub fn aggregate(entries: &[WorkEntry]) -> (Vec<DailySummaryRow>, Vec<ProcessSummaryRow>) {
    let mut agg = Aggregator::new();
    for entry in entries {
        agg.add(entry);
    }
    agg.finish()
}
