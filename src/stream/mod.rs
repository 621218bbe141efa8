//! Stream Module
//!
//! Reads the session file header and splits the rest of the input into
//! command frames.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Header                                  │
//! │ ┌──────────────────┬──────────────────┐ │
//! │ │ Magic "SNSS" (4) │ Version i32 (4)  │ │
//! │ └──────────────────┴──────────────────┘ │
//! ├─────────────────────────────────────────┤
//! │ Frame 1                                 │
//! │ ┌──────────┬──────────┬───────────────┐ │
//! │ │ Size (2) │ Kind (1) │ Payload       │ │
//! │ └──────────┴──────────┴───────────────┘ │
//! ├─────────────────────────────────────────┤
//! │ ... until end of input                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! `Size` counts the kind byte plus the payload. Running out of input exactly
//! at a frame boundary ends the stream; anything else is `Truncated`.

mod frame;
mod header;
mod reader;

use std::io::{ErrorKind, Read};

use crate::error::{Result, SnssError};

pub use frame::{read_next_frame, Frame, SIZE_PREFIX};
pub use header::{read_header, FileHeader, HEADER_SIZE, MAGIC};
pub use reader::{Commands, SnssReader};

/// Fill `buf` from `reader`, stopping early only at end of input
///
/// Returns the number of bytes read.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(SnssError::Io(err)),
        }
    }
    Ok(filled)
}
