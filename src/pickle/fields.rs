//! Pickle field readers
//!
//! Each reader decodes one field starting at offset 0 of `buf` and returns
//! `(bytes_consumed, value)`. Nothing is consumed on error.

use bytes::Bytes;

use crate::error::{Result, SnssError};

use super::{align4, LENGTH_PREFIX_SIZE};

// =============================================================================
// Variable-length Fields
// =============================================================================

/// Read a length-prefixed byte string
///
/// Invalid UTF-8 is replaced with U+FFFD.
pub fn read_string(buf: &[u8]) -> Result<(usize, String)> {
    let len = read_length(buf)?;
    let data = body(buf, len)?;
    Ok((align4(len) + LENGTH_PREFIX_SIZE, String::from_utf8_lossy(data).into_owned()))
}

/// Read a UTF-16 string whose prefix counts code units, not bytes
///
/// Unpaired surrogates are replaced with U+FFFD.
pub fn read_string16(buf: &[u8]) -> Result<(usize, String)> {
    let units = read_length(buf)?;
    let byte_len = units.checked_mul(2).ok_or(SnssError::Underflow {
        needed: usize::MAX,
        available: buf.len() - LENGTH_PREFIX_SIZE,
    })?;
    let data = body(buf, byte_len)?;

    let code_units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok((align4(byte_len) + LENGTH_PREFIX_SIZE, String::from_utf16_lossy(&code_units)))
}

/// Read a length-prefixed blob, copied out of `buf`
pub fn read_bytes(buf: &[u8]) -> Result<(usize, Bytes)> {
    let len = read_length(buf)?;
    let data = body(buf, len)?;
    Ok((align4(len) + LENGTH_PREFIX_SIZE, Bytes::copy_from_slice(data)))
}

// =============================================================================
// Fixed-width Fields
// =============================================================================

pub fn read_u32(buf: &[u8]) -> Result<(usize, u32)> {
    let raw = fixed::<4>(buf, "u32 field")?;
    Ok((4, u32::from_le_bytes(raw)))
}

pub fn read_i32(buf: &[u8]) -> Result<(usize, i32)> {
    let raw = fixed::<4>(buf, "i32 field")?;
    Ok((4, i32::from_le_bytes(raw)))
}

pub fn read_i64(buf: &[u8]) -> Result<(usize, i64)> {
    let raw = fixed::<8>(buf, "i64 field")?;
    Ok((8, i64::from_le_bytes(raw)))
}

/// Booleans are stored as a u32; only the value 1 is true
pub fn read_bool(buf: &[u8]) -> Result<(usize, bool)> {
    let (n, raw) = read_u32(buf)?;
    Ok((n, raw == 1))
}

// =============================================================================
// Helpers
// =============================================================================

fn read_length(buf: &[u8]) -> Result<usize> {
    if buf.len() < LENGTH_PREFIX_SIZE {
        return Err(SnssError::Underflow {
            needed: LENGTH_PREFIX_SIZE,
            available: buf.len(),
        });
    }
    Ok(u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize)
}

/// The `len` data bytes following the length prefix
fn body(buf: &[u8], len: usize) -> Result<&[u8]> {
    let rest = &buf[LENGTH_PREFIX_SIZE..];
    if rest.len() < len {
        return Err(SnssError::Underflow {
            needed: len,
            available: rest.len(),
        });
    }
    Ok(&rest[..len])
}

fn fixed<const N: usize>(buf: &[u8], what: &str) -> Result<[u8; N]> {
    buf.get(..N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| SnssError::truncated(what, N, buf.len()))
}
