//! Page transition classification
//!
//! One packed u32 word carries the transition type in its low byte and the
//! mode flags in its high byte. Both are split out at decode time.

use std::fmt;

use serde::{Serialize, Serializer};

// =============================================================================
// Transition Type
// =============================================================================

/// How a navigation was started
///
/// Values outside the known range are kept as `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionType {
    UserClickLink,
    OmnibarUrl,
    Bookmark,
    /// e.g. an embedded ad
    SubFrameAuto,
    SubFrameManual,
    OmnibarSuggestion,
    StartPage,
    FormSubmission,
    Reloaded,
    KeywordSearch,
    KeywordHttp,
    Unknown(u8),
}

impl TransitionType {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => TransitionType::UserClickLink,
            1 => TransitionType::OmnibarUrl,
            2 => TransitionType::Bookmark,
            3 => TransitionType::SubFrameAuto,
            4 => TransitionType::SubFrameManual,
            5 => TransitionType::OmnibarSuggestion,
            6 => TransitionType::StartPage,
            7 => TransitionType::FormSubmission,
            8 => TransitionType::Reloaded,
            9 => TransitionType::KeywordSearch,
            10 => TransitionType::KeywordHttp,
            other => TransitionType::Unknown(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            TransitionType::UserClickLink => 0,
            TransitionType::OmnibarUrl => 1,
            TransitionType::Bookmark => 2,
            TransitionType::SubFrameAuto => 3,
            TransitionType::SubFrameManual => 4,
            TransitionType::OmnibarSuggestion => 5,
            TransitionType::StartPage => 6,
            TransitionType::FormSubmission => 7,
            TransitionType::Reloaded => 8,
            TransitionType::KeywordSearch => 9,
            TransitionType::KeywordHttp => 10,
            TransitionType::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for TransitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransitionType::UserClickLink => "user clicked link",
            TransitionType::OmnibarUrl => "omnibar URL",
            TransitionType::Bookmark => "clicked bookmark",
            TransitionType::SubFrameAuto => "subframe auto navigation",
            TransitionType::SubFrameManual => "subframe manual navigation",
            TransitionType::OmnibarSuggestion => "omnibar suggestion",
            TransitionType::StartPage => "start page",
            TransitionType::FormSubmission => "form submission",
            TransitionType::Reloaded => "reloaded",
            TransitionType::KeywordSearch => "keyword search",
            TransitionType::KeywordHttp => "keyword http",
            TransitionType::Unknown(raw) => return write!(f, "unknown ({raw})"),
        };
        f.write_str(label)
    }
}

// =============================================================================
// Transition Mode
// =============================================================================

/// One qualifier bit of a [`TransitionMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionFlag {
    BackFwdButton,
    AddressBar,
    Homepage,
    BeginNavChain,
    LastRedirChain,
    /// JS or meta tag
    ClientRedir,
    /// HTTP header
    ServerRedir,
}

impl TransitionFlag {
    /// All flags in bit order
    pub const ALL: [TransitionFlag; 7] = [
        TransitionFlag::BackFwdButton,
        TransitionFlag::AddressBar,
        TransitionFlag::Homepage,
        TransitionFlag::BeginNavChain,
        TransitionFlag::LastRedirChain,
        TransitionFlag::ClientRedir,
        TransitionFlag::ServerRedir,
    ];

    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            TransitionFlag::BackFwdButton => "BackFwdButton",
            TransitionFlag::AddressBar => "AddressBar",
            TransitionFlag::Homepage => "Homepage",
            TransitionFlag::BeginNavChain => "BeginNavChain",
            TransitionFlag::LastRedirChain => "LastRedirChain",
            TransitionFlag::ClientRedir => "ClientRedir",
            TransitionFlag::ServerRedir => "ServerRedir",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransitionFlag::BackFwdButton => "used browser back or fwd button",
            TransitionFlag::AddressBar => "used address bar",
            TransitionFlag::Homepage => "homepage",
            TransitionFlag::BeginNavChain => "begin nav chain",
            TransitionFlag::LastRedirChain => "last redirect chain",
            TransitionFlag::ClientRedir => "client-side redirect",
            TransitionFlag::ServerRedir => "server-side redirect",
        }
    }
}

/// Set of transition qualifier flags
///
/// The raw byte is kept as-is, so bits without a defined flag survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionMode(u8);

impl TransitionMode {
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, flag: TransitionFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// True when no defined flag is set
    pub fn is_empty(self) -> bool {
        self.iter().next().is_none()
    }

    /// Defined flags that are set, in bit order
    pub fn iter(self) -> impl Iterator<Item = TransitionFlag> {
        TransitionFlag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl fmt::Display for TransitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(TransitionFlag::label).collect();
        f.write_str(&labels.join(","))
    }
}

impl Serialize for TransitionMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(TransitionFlag::name))
    }
}

/// Split a packed transition word into its type and mode
pub fn split_transition(word: u32) -> (TransitionType, TransitionMode) {
    let kind = TransitionType::from_raw((word & 0xFF) as u8);
    let mode = TransitionMode::from_bits((word >> 24) as u8);
    (kind, mode)
}
