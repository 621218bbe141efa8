//! # snss
//!
//! A read-only decoder for browser session ("SNSS") files:
//! - Header validation (magic + informational version)
//! - Size-prefixed command frame reading until clean end of stream
//! - Pickle field decoding (aligned, length-prefixed strings, UTF-16 strings, blobs)
//! - Typed command records with an explicit `Unknown` fallback
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Session file (Read)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Stream Reader                       │
//! │          (header, u16 size + kind tag + payload)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Frame
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                Command Payload Decoders                      │
//! │     SelectedNavigationInTab | UpdateTabNavigation | Unknown  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │    Pickle     │
//!               │ Field Reader  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod pickle;
pub mod command;
pub mod stream;
pub mod time;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SnssError, Result};
pub use config::ReaderConfig;
pub use command::{Command, CommandKind};
pub use stream::SnssReader;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the snss crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
