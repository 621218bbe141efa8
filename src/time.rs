//! Timestamp conversion
//!
//! Session timestamps count microseconds since 1601-01-01 UTC (the
//! Windows FILETIME epoch). Conversion truncates to whole seconds.

use chrono::{DateTime, Utc};

/// Microseconds between 1601-01-01 and 1970-01-01
pub const EPOCH_DELTA_MICROS: i64 = 11_644_473_600_000_000;

/// Seconds since the Unix epoch for a session timestamp
pub fn unix_seconds(timestamp: i64) -> i64 {
    timestamp.saturating_sub(EPOCH_DELTA_MICROS) / 1_000_000
}

/// Calendar time for a session timestamp, `None` if out of chrono's range
pub fn to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(unix_seconds(timestamp), 0)
}
