//! Command kind tags
//!
//! The one-byte tag at the start of every frame.

use std::fmt;

/// Known command kinds
///
/// Only `UpdateTabNavigation` and `SelectedNavigationInTab` have payload
/// decoders; the others are carried as `Command::Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandKind {
    UpdateTabNavigation = 0x01,
    RestoredEntry = 0x02,
    Window = 0x03,
    SelectedNavigationInTab = 0x04,
    PinnedState = 0x05,
    SetExtensionAppId = 0x06,
}

impl CommandKind {
    /// Look up a kind by its frame tag
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(CommandKind::UpdateTabNavigation),
            0x02 => Some(CommandKind::RestoredEntry),
            0x03 => Some(CommandKind::Window),
            0x04 => Some(CommandKind::SelectedNavigationInTab),
            0x05 => Some(CommandKind::PinnedState),
            0x06 => Some(CommandKind::SetExtensionAppId),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::UpdateTabNavigation => "Update Tab Navigation",
            CommandKind::RestoredEntry => "Restored Entry",
            CommandKind::Window => "Window",
            CommandKind::SelectedNavigationInTab => "Selected Navigation In Tab",
            CommandKind::PinnedState => "Pinned State",
            CommandKind::SetExtensionAppId => "Set Extension App ID",
        }
    }

    /// Whether frames of this kind are decoded field by field
    pub fn has_decoder(self) -> bool {
        matches!(
            self,
            CommandKind::UpdateTabNavigation | CommandKind::SelectedNavigationInTab
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
