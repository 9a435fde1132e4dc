//! Canonical encodings for 256-bit scalars and coordinates.
//!
//! Persisted and displayed values use zero-padded 64-character big-endian
//! hexadecimal, uppercase on output with either case accepted on input.

use crate::error::{Error, Result};
use num_bigint::BigUint;

/// Number of hex characters in a canonically encoded 256-bit value.
const HEX_LEN: usize = 64;

/// Encode a value as 64 uppercase, zero-padded hex characters.
pub fn hex_encode(value: &BigUint) -> String {
    format!("{value:064X}")
}

/// Decode a canonical 64-character hex string.
///
/// Fails with [`Error::MalformedKey`] on any other length or on non-hex
/// characters.
pub fn hex_decode(hex: &str) -> Result<BigUint> {
    if hex.len() != HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedKey);
    }
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::MalformedKey)
}

/// Fixed-width 32-byte big-endian form of a value already reduced below
/// 2²⁵⁶.
pub(crate) fn be_bytes_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}
