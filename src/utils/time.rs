//! Time utilities: strict HH:MM parsing and durations.

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

/// Parse a 24-hour `HH:MM` value. "9:00", "09:00:00" and "24:00" are rejected.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if !HHMM.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}
