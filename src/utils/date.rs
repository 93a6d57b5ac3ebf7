use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static YYYY_MM_DD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parse a `YYYY-MM-DD` calendar date. Shape is checked strictly
/// ("2026-2-13" is rejected) and the date must exist ("2026-02-30" is rejected).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !YYYY_MM_DD.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
