//! Selected Navigation In Tab command
//!
//! Fixed-width payload, no pickle framing:
//! ```text
//! ┌──────────────┬─────────────┬───────────────────┐
//! │ TabId i32(4) │ Index i32(4)│ Timestamp i64 (8) │
//! └──────────────┴─────────────┴───────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, SnssError};
use crate::pickle;
use crate::time;

/// Minimum payload size
pub const PAYLOAD_SIZE: usize = 16;

/// Marks which navigation entry of a tab is current
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedNavigationInTab {
    pub tab_id: i32,
    pub index: i32,
    /// Microseconds since 1601-01-01 UTC
    pub timestamp: i64,
}

impl SelectedNavigationInTab {
    /// Decode from a frame payload; trailing bytes are ignored
    pub fn decode(payload: &[u8]) -> Result<Self> {
        if payload.len() < PAYLOAD_SIZE {
            return Err(SnssError::truncated(
                "Selected Navigation In Tab payload",
                PAYLOAD_SIZE,
                payload.len(),
            ));
        }

        let (_, tab_id) = pickle::read_i32(&payload[0..4])?;
        let (_, index) = pickle::read_i32(&payload[4..8])?;
        let (_, timestamp) = pickle::read_i64(&payload[8..16])?;

        Ok(Self {
            tab_id,
            index,
            timestamp,
        })
    }

    /// Seconds since the Unix epoch
    pub fn unix_seconds(&self) -> i64 {
        time::unix_seconds(self.timestamp)
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        time::to_datetime(self.timestamp)
    }
}

impl fmt::Display for SelectedNavigationInTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selected Navigation In Tab: Tab: {}, Index: {}, Time: ",
            self.tab_id, self.index
        )?;
        match self.time() {
            Some(when) => write!(f, "{}", when.format("%b %-d %Y, %-I:%M:%S %P UTC")),
            None => write!(f, "<out of range: {}>", self.timestamp),
        }
    }
}
