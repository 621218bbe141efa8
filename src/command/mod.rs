//! Command Module
//!
//! Turns a frame's kind tag and payload into a typed record.
//!
//! ### Kinds
//! - 0x01: Update Tab Navigation      - pickle region (decoded)
//! - 0x02: Restored Entry             - not decoded
//! - 0x03: Window                     - not decoded
//! - 0x04: Selected Navigation In Tab - fixed 16 bytes (decoded)
//! - 0x05: Pinned State               - not decoded
//! - 0x06: Set Extension App ID       - not decoded
//!
//! Every frame maps to exactly one `Command`; kinds without a decoder become
//! `Command::Unknown` with their payload untouched.

mod kind;
mod selected_navigation;
mod transition;
mod update_tab_navigation;

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::error::Result;

pub use kind::CommandKind;
pub use selected_navigation::SelectedNavigationInTab;
pub use transition::{split_transition, TransitionFlag, TransitionMode, TransitionType};
pub use update_tab_navigation::UpdateTabNavigation;

/// A decoded command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    UpdateTabNavigation(UpdateTabNavigation),

    SelectedNavigationInTab(SelectedNavigationInTab),

    /// Any kind without a payload decoder
    Unknown { kind: u8, payload: Bytes },
}

impl Command {
    /// Dispatch a payload to the decoder for `tag`
    pub fn decode(tag: u8, payload: Bytes) -> Result<Self> {
        match CommandKind::from_tag(tag) {
            Some(CommandKind::UpdateTabNavigation) => {
                UpdateTabNavigation::decode(&payload).map(Command::UpdateTabNavigation)
            }
            Some(CommandKind::SelectedNavigationInTab) => {
                SelectedNavigationInTab::decode(&payload).map(Command::SelectedNavigationInTab)
            }
            _ => Ok(Command::Unknown { kind: tag, payload }),
        }
    }

    /// The frame tag this command was read from
    pub fn tag(&self) -> u8 {
        match self {
            Command::UpdateTabNavigation(_) => CommandKind::UpdateTabNavigation.tag(),
            Command::SelectedNavigationInTab(_) => CommandKind::SelectedNavigationInTab.tag(),
            Command::Unknown { kind, .. } => *kind,
        }
    }

    /// The enumerated kind, if the tag is one
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_tag(self.tag())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown { .. })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::UpdateTabNavigation(cmd) => write!(f, "{cmd}"),
            Command::SelectedNavigationInTab(cmd) => write!(f, "{cmd}"),
            Command::Unknown { kind, payload } => match CommandKind::from_tag(*kind) {
                Some(known) => write!(f, "{known} (0x{kind:02x}): {} bytes, not decoded", payload.len()),
                None => write!(f, "Unknown (0x{kind:02x}): {} bytes, not decoded", payload.len()),
            },
        }
    }
}
