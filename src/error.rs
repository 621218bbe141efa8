//! Error types for snss
//!
//! Provides a unified error type for all decode operations.

use thiserror::Error;

/// Result type alias using SnssError
pub type Result<T> = std::result::Result<T, SnssError>;

/// Unified error type for session file decoding
///
/// Every variant is fatal to the stream being decoded: frame boundaries
/// cannot be trusted once one length field is wrong.
#[derive(Debug, Error)]
pub enum SnssError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Header Errors
    // -------------------------------------------------------------------------
    #[error("Invalid magic bytes: expected 0x{expected:08x}, got 0x{found:08x}")]
    BadMagic { found: u32, expected: u32 },

    // -------------------------------------------------------------------------
    // Structural Errors
    // -------------------------------------------------------------------------
    #[error("Truncated: {0}")]
    Truncated(String),

    #[error("Pickle underflow: field needs {needed} bytes, only {available} remain")]
    Underflow { needed: usize, available: usize },
}

impl SnssError {
    /// Build a `Truncated` error for a read that wanted `expected` bytes but got `got`
    pub(crate) fn truncated(what: &str, expected: usize, got: usize) -> Self {
        SnssError::Truncated(format!("{what}: expected {expected} bytes, got {got}"))
    }
}
