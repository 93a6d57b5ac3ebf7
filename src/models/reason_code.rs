use serde::Serialize;
use std::fmt;

/// Why a raw row was rejected. Closed set: the error report relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    MissingRequiredField,
    InvalidDate,
    InvalidTimeFormat,
    NonPositiveDuration,
    InvalidMinutes,
    MissingTimeInformation,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ReasonCode::InvalidDate => "INVALID_DATE",
            ReasonCode::InvalidTimeFormat => "INVALID_TIME_FORMAT",
            ReasonCode::NonPositiveDuration => "NON_POSITIVE_DURATION",
            ReasonCode::InvalidMinutes => "INVALID_MINUTES",
            ReasonCode::MissingTimeInformation => "MISSING_TIME_INFORMATION",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
