//! Pickle Module
//!
//! Decodes the length-prefixed, 4-byte-aligned field encoding used inside
//! command payloads.
//!
//! ## Responsibilities
//! - Fixed-width little-endian primitives (i32, u32, i64, bool)
//! - Byte strings, UTF-16 strings and raw blobs with a u32 length prefix
//! - Padding every variable-length field to a 4-byte boundary
//! - Bounds checks before any slicing (no reads past the region end)
//!
//! ## Field Layout
//! ```text
//! ┌──────────┬───────────────────────────┬─────────────┐
//! │ Len (4)  │ Data (Len or 2*Len bytes) │ Pad (0..3)  │
//! └──────────┴───────────────────────────┴─────────────┘
//!   consumed = align4(data bytes) + 4
//! ```

mod fields;
mod reader;

pub use fields::{
    read_bool, read_bytes, read_i32, read_i64, read_string, read_string16, read_u32,
};
pub use reader::PickleReader;

/// Size of the length prefix in front of every variable-length field
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Round `n` up to the next multiple of 4
///
/// `align4(0) == 0`, `align4(1) == 4`, `align4(4) == 4`, `align4(5) == 8`.
pub fn align4(n: usize) -> usize {
    n + (4 - n % 4) % 4
}
