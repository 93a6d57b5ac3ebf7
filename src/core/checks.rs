//! Row checks. Each one is a pure function over a `RawRow` returning either
//! the checked value or the reason code (plus a short detail) of the failure.
//! The parser chains them with `?` in a fixed order:
//! required fields → date → time resolution.

use crate::core::options::{ParseOptions, TimePrecedence};
use crate::models::{RawRow, ReasonCode};
use crate::utils::{date, time};
use chrono::NaiveDate;

pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "process", "operator"];

pub type CheckResult<T> = Result<T, (ReasonCode, String)>;

/// Where the minutes of a row come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    StartEnd,
    Minutes,
    Missing,
}

/// `date`, `process` and `operator` must be present and non-blank.
pub fn check_required(row: &RawRow) -> CheckResult<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| row.is_blank(c))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err((
            ReasonCode::MissingRequiredField,
            format!("missing required: {}", missing.join(",")),
        ))
    }
}

pub fn check_date(row: &RawRow) -> CheckResult<NaiveDate> {
    let raw = row.value("date");
    date::parse_date(raw).ok_or_else(|| {
        (
            ReasonCode::InvalidDate,
            format!("date '{raw}': expected YYYY-MM-DD"),
        )
    })
}

/// Decide which encoding a row uses. A lone `start` or `end` does not count.
pub fn time_source(row: &RawRow, precedence: TimePrecedence) -> TimeSource {
    let has_span = !row.is_blank("start") && !row.is_blank("end");
    let has_minutes = !row.is_blank("minutes");

    match precedence {
        TimePrecedence::StartEnd if has_span => TimeSource::StartEnd,
        TimePrecedence::Minutes if has_minutes => TimeSource::Minutes,
        _ if has_span => TimeSource::StartEnd,
        _ if has_minutes => TimeSource::Minutes,
        _ => TimeSource::Missing,
    }
}

/// Minutes between `start` and `end` (same day). Must be > 0.
pub fn check_span(row: &RawRow) -> CheckResult<u32> {
    let start_raw = row.value("start");
    let end_raw = row.value("end");

    let start = time::parse_time(start_raw).ok_or_else(|| {
        (
            ReasonCode::InvalidTimeFormat,
            format!("start '{start_raw}': expected HH:MM"),
        )
    })?;
    let end = time::parse_time(end_raw).ok_or_else(|| {
        (
            ReasonCode::InvalidTimeFormat,
            format!("end '{end_raw}': expected HH:MM"),
        )
    })?;

    let diff = time::minutes_between(start, end);
    if diff <= 0 {
        return Err((
            ReasonCode::NonPositiveDuration,
            format!("end {end_raw} must be after start {start_raw}"),
        ));
    }

    // 1..=1439 after the check above
    Ok(diff as u32)
}

/// The literal `minutes` column: ASCII digits only.
pub fn check_minutes(row: &RawRow, allow_zero: bool) -> CheckResult<u32> {
    let raw = row.value("minutes");

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err((
            ReasonCode::InvalidMinutes,
            format!("minutes '{raw}': not a non-negative integer"),
        ));
    }

    let minutes: u32 = raw.parse().map_err(|_| {
        (
            ReasonCode::InvalidMinutes,
            format!("minutes '{raw}': out of range"),
        )
    })?;

    if minutes == 0 && !allow_zero {
        return Err((
            ReasonCode::InvalidMinutes,
            "minutes must be greater than 0".to_string(),
        ));
    }

    Ok(minutes)
}

/// Resolve the canonical minutes of a row according to `options`.
pub fn resolve_minutes(row: &RawRow, options: &ParseOptions) -> CheckResult<u32> {
    match time_source(row, options.time_precedence) {
        TimeSource::StartEnd => check_span(row),
        TimeSource::Minutes => check_minutes(row, options.allow_zero_minutes),
        TimeSource::Missing => Err((
            ReasonCode::MissingTimeInformation,
            "provide start+end or minutes".to_string(),
        )),
    }
}
