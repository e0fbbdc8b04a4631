//! Validity window arithmetic.

use chrono::{DateTime, Months, Utc};
use time::OffsetDateTime;

use crate::error::PkiError;

/// Current time truncated to whole seconds, the resolution X.509 encodes.
pub(crate) fn now() -> Result<DateTime<Utc>, PkiError> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0)
        .ok_or_else(|| PkiError::Certificate("current time out of range".to_string()))
}

/// Calendar-aware `start + years`.
pub(crate) fn add_years(start: DateTime<Utc>, years: u32) -> Result<DateTime<Utc>, PkiError> {
    years
        .checked_mul(12)
        .and_then(|months| start.checked_add_months(Months::new(months)))
        .ok_or_else(|| PkiError::Certificate(format!("validity of {} years overflows", years)))
}

/// Convert for rcgen, which works in `time` types.
pub(crate) fn to_offset(at: DateTime<Utc>) -> Result<OffsetDateTime, PkiError> {
    OffsetDateTime::from_unix_timestamp(at.timestamp())
        .map_err(|e| PkiError::Certificate(format!("invalid timestamp: {}", e)))
}

/// Convert a certificate timestamp back.
pub(crate) fn from_timestamp(secs: i64) -> Result<DateTime<Utc>, PkiError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| PkiError::Certificate(format!("timestamp {} out of range", secs)))
}
