use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which encoding wins when a row carries both start/end and minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimePrecedence {
    /// Derive minutes from start/end, ignore the minutes column.
    #[default]
    StartEnd,
    /// Use the minutes column, ignore start/end.
    Minutes,
}

impl TimePrecedence {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePrecedence::StartEnd => "start_end",
            TimePrecedence::Minutes => "minutes",
        }
    }
}

/// Knobs of the row parser. Built from the configuration file and handed to
/// the pipeline explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub time_precedence: TimePrecedence,
    /// When false, an explicit `minutes = 0` is rejected as INVALID_MINUTES.
    pub allow_zero_minutes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            time_precedence: TimePrecedence::StartEnd,
            allow_zero_minutes: true,
        }
    }
}
