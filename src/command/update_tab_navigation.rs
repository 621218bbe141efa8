//! Update Tab Navigation command
//!
//! The payload wraps a pickle region behind its own length prefix:
//! ```text
//! ┌──────────┬──────────────────────────────────────────────────────┐
//! │ PLen (4) │ Pickle region (PLen bytes)                           │
//! └──────────┴──────────────────────────────────────────────────────┘
//!
//! Region fields, in order:
//!   tab_id i32 | index i32 | url string | title string16 | page_state bytes
//!   transition u32 | has_post_data u32 | referrer_url string
//!   referrer_policy i32 | original_request_url string
//!   is_overriding_user_agent u32
//! ```

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::error::{Result, SnssError};
use crate::pickle::{self, PickleReader, LENGTH_PREFIX_SIZE};

use super::transition::{split_transition, TransitionMode, TransitionType};

/// One navigation entry of a tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTabNavigation {
    pub tab_id: i32,
    pub index: i32,
    pub url: String,
    pub title: String,
    /// Serialized page state, left opaque
    pub page_state: Bytes,
    pub transition_type: TransitionType,
    pub transition_mode: TransitionMode,
    pub has_post_data: bool,
    pub referrer_url: String,
    pub referrer_policy: i32,
    pub original_request_url: String,
    pub is_overriding_user_agent: bool,
}

impl UpdateTabNavigation {
    /// Decode from a frame payload
    ///
    /// The first failing field aborts the decode; no partial record is returned.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let (_, region_len) = pickle::read_u32(payload)?;
        let region_len = region_len as usize;
        let region = payload
            .get(LENGTH_PREFIX_SIZE..LENGTH_PREFIX_SIZE.saturating_add(region_len))
            .ok_or_else(|| {
                SnssError::truncated(
                    "Update Tab Navigation pickle region",
                    region_len,
                    payload.len() - LENGTH_PREFIX_SIZE,
                )
            })?;

        let mut fields = PickleReader::new(region);

        let tab_id = fields.read_i32()?;
        let index = fields.read_i32()?;
        let url = fields.read_string()?;
        let title = fields.read_string16()?;
        let page_state = fields.read_bytes()?;
        let (transition_type, transition_mode) = split_transition(fields.read_u32()?);
        let has_post_data = fields.read_bool()?;
        let referrer_url = fields.read_string()?;
        let referrer_policy = fields.read_i32()?;
        let original_request_url = fields.read_string()?;
        let is_overriding_user_agent = fields.read_bool()?;

        tracing::trace!(tab_id, index, consumed = fields.position(), "decoded tab navigation");

        Ok(Self {
            tab_id,
            index,
            url,
            title,
            page_state,
            transition_type,
            transition_mode,
            has_post_data,
            referrer_url,
            referrer_policy,
            original_request_url,
            is_overriding_user_agent,
        })
    }
}

impl fmt::Display for UpdateTabNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Update Tab Navigation: Tab: {}, Index: {}, URL: {}, Title: {}",
            self.tab_id, self.index, self.url, self.title
        )?;
        writeln!(
            f,
            "  Transition: {} [{}], Post data: {}, Page state: {} bytes",
            self.transition_type,
            self.transition_mode,
            self.has_post_data,
            self.page_state.len()
        )?;
        write!(
            f,
            "  Referrer: {} (policy {}), Original URL: {}, Overriding UA: {}",
            self.referrer_url,
            self.referrer_policy,
            self.original_request_url,
            self.is_overriding_user_agent
        )
    }
}
