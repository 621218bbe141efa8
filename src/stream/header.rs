//! File header

use std::io::Read;

use crate::error::{Result, SnssError};

use super::read_fully;

/// Magic signature, the bytes `SNSS` read as a little-endian u32
pub const MAGIC: u32 = 0x5353_4E53;

/// Header size: Magic (4) + Version (4) = 8 bytes
pub const HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u32,
    /// Informational only; every version is decoded with the same layout
    pub version: i32,
}

/// Read and validate the header at the start of a session file
pub fn read_header<R: Read>(reader: &mut R) -> Result<FileHeader> {
    let mut raw = [0u8; HEADER_SIZE];
    let got = read_fully(reader, &mut raw)?;

    if got >= 4 {
        let signature = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        if signature != MAGIC {
            return Err(SnssError::BadMagic {
                found: signature,
                expected: MAGIC,
            });
        }
    }
    if got < HEADER_SIZE {
        return Err(SnssError::truncated("file header", HEADER_SIZE, got));
    }

    let header = FileHeader {
        signature: MAGIC,
        version: i32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]),
    };
    tracing::debug!(version = header.version, "session file header read");
    Ok(header)
}
