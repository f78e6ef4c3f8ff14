//! Hex and fixed-width big-endian codecs.
//!
//! The 32-bit helpers are right-aligned: the value always occupies the
//! *last* four bytes of the buffer. This is how a small index (e.g. a
//! sub-account number) is packed into a wider fixed-size field.

use crate::error::{TypeError, TypeResult};

/// Render bytes as uppercase hex, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse hex text (either case) into bytes.
///
/// Odd-length input is rejected rather than truncated.
pub fn hex_to_bytes(text: &str) -> TypeResult<Vec<u8>> {
    hex::decode(text).map_err(|e| TypeError::InvalidEncoding(e.to_string()))
}

/// Read an unsigned 64-bit big-endian value from the first 8 bytes.
pub fn read_u64_be(bytes: &[u8]) -> TypeResult<u64> {
    let head = bytes.get(..8).ok_or(TypeError::BufferTooSmall {
        required: 8,
        actual: bytes.len(),
    })?;
    let mut arr = [0u8; 8];
    arr.copy_from_slice(head);
    Ok(u64::from_be_bytes(arr))
}

/// Encode an unsigned 64-bit value as 8 big-endian bytes.
pub fn write_u64_be(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Read a 32-bit big-endian value from the last 4 bytes of `buffer`.
pub fn read_u32_be_tail(buffer: &[u8]) -> TypeResult<u32> {
    if buffer.len() < 4 {
        return Err(TypeError::BufferTooSmall {
            required: 4,
            actual: buffer.len(),
        });
    }
    let tail = &buffer[buffer.len() - 4..];
    Ok(u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]]))
}

/// Allocate a zeroed buffer of `total_len` bytes and write `value`
/// big-endian into its last 4 bytes.
pub fn write_u32_be_tail(value: u32, total_len: usize) -> TypeResult<Vec<u8>> {
    if total_len < 4 {
        return Err(TypeError::BufferTooSmall {
            required: 4,
            actual: total_len,
        });
    }
    let mut buffer = vec![0u8; total_len];
    buffer[total_len - 4..].copy_from_slice(&value.to_be_bytes());
    Ok(buffer)
}

/// One byte per character. Domain tags are built with this, so anything
/// outside ASCII is an error instead of being silently truncated.
pub fn ascii_to_bytes(text: &str) -> TypeResult<Vec<u8>> {
    if !text.is_ascii() {
        return Err(TypeError::InvalidEncoding(format!(
            "non-ASCII text: {text:?}"
        )));
    }
    Ok(text.as_bytes().to_vec())
}
