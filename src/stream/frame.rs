//! Command frames

use std::io::Read;

use bytes::Bytes;

use crate::command::Command;
use crate::error::{Result, SnssError};

use super::read_fully;

/// Size prefix: u16 little-endian
pub const SIZE_PREFIX: usize = 2;

/// One size-prefixed record of the command stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: u8,
    /// `size - 1` bytes following the kind tag
    pub payload: Bytes,
}

impl Frame {
    /// Value of the size prefix this frame was read with
    pub fn size(&self) -> usize {
        self.payload.len() + 1
    }

    /// Decode the payload according to the kind tag
    pub fn decode(self) -> Result<Command> {
        Command::decode(self.kind, self.payload)
    }
}

/// Read the next frame
///
/// Returns:
/// - `Ok(Some(frame))` — a complete frame
/// - `Ok(None)` — input ended exactly at a frame boundary
/// - `Err(Truncated)` — input ended inside the size prefix or the frame body
pub fn read_next_frame<R: Read>(reader: &mut R) -> Result<Option<Frame>> {
    let mut prefix = [0u8; SIZE_PREFIX];
    match read_fully(reader, &mut prefix)? {
        0 => return Ok(None),
        SIZE_PREFIX => {}
        got => return Err(SnssError::truncated("frame size", SIZE_PREFIX, got)),
    }

    let size = u16::from_le_bytes(prefix) as usize;
    if size == 0 {
        return Err(SnssError::Truncated(
            "frame size is 0, no room for the kind tag".to_string(),
        ));
    }

    let mut data = vec![0u8; size];
    let got = read_fully(reader, &mut data)?;
    if got < size {
        return Err(SnssError::truncated("frame body", size, got));
    }

    let data = Bytes::from(data);
    let kind = data[0];
    tracing::debug!(size, kind, "command frame read");

    Ok(Some(Frame {
        kind,
        payload: data.slice(1..),
    }))
}
