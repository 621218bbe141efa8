//! Pickle cursor
//!
//! Sequences field reads over one pickle region.

use bytes::Bytes;

use crate::error::Result;

use super::fields;

/// Read-only cursor over a pickle region
///
/// The position only moves after a successful read. Because the padding of
/// the final field may be missing, the position can end up past the end of
/// the region; `remaining()` is then empty and further reads fail.
#[derive(Debug, Clone)]
pub struct PickleReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PickleReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far, including padding
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unread part of the region
    pub fn remaining(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or(&[])
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.step(fields::read_i32)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.step(fields::read_u32)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.step(fields::read_i64)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        self.step(fields::read_bool)
    }

    pub fn read_string(&mut self) -> Result<String> {
        self.step(fields::read_string)
    }

    pub fn read_string16(&mut self) -> Result<String> {
        self.step(fields::read_string16)
    }

    pub fn read_bytes(&mut self) -> Result<Bytes> {
        self.step(fields::read_bytes)
    }

    fn step<T>(&mut self, read: impl FnOnce(&'a [u8]) -> Result<(usize, T)>) -> Result<T> {
        let (consumed, value) = read(self.remaining())?;
        tracing::trace!(offset = self.pos, consumed, "pickle field read");
        self.pos += consumed;
        Ok(value)
    }
}
