//! Canonical lowercase hex rendering of byte buffers.
//!
//! Golden values are embedded in test source as hex literals, so the
//! encoding is fixed: two lowercase digits per byte, no separators, no
//! `0x` prefix, no trailing newline. Encoding is total; decoding rejects
//! odd-length input and non-hex characters.

use crate::error::DecodeError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Two-character rendering of every byte value.
static HEX_TABLE: [[u8; 2]; 256] = build_table();

const fn build_table() -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [DIGITS[i >> 4], DIGITS[i & 0x0f]];
        i += 1;
    }
    table
}

/// Encode bytes as a lowercase hex string.
///
/// Accepts anything viewable as bytes, so fixed-size output blocks can be
/// passed directly:
///
/// ```
/// let block = [0x00u8, 0xff, 0x0a];
/// assert_eq!(golden_harness::hex::encode(block), "00ff0a");
/// ```
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    let bytes = data.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    encode_into(&mut out, bytes);
    out
}

/// Append the hex rendering of `bytes` to `out`.
pub fn encode_into(out: &mut String, bytes: &[u8]) {
    out.reserve(bytes.len() * 2);
    for &byte in bytes {
        let [hi, lo] = HEX_TABLE[usize::from(byte)];
        out.push(char::from(hi));
        out.push(char::from(lo));
    }
}

/// Decode a hex string (either case) back into bytes.
///
/// # Errors
///
/// Returns [`DecodeError::OddLength`] if the input has an odd number of
/// bytes, or [`DecodeError::InvalidCharacter`] for the first character that
/// is not a hex digit.
pub fn decode(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: raw.len() });
    }

    let mut out = Vec::with_capacity(raw.len() / 2);
    for index in (0..raw.len()).step_by(2) {
        let hi = digit_value(hex, index)?;
        let lo = digit_value(hex, index + 1)?;
        out.push(hi * 16 + lo);
    }
    Ok(out)
}

fn digit_value(hex: &str, index: usize) -> Result<u8, DecodeError> {
    let c = hex.as_bytes()[index];
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => {
            // Every byte before `index` was an ASCII digit, so `index` is a
            // char boundary.
            let ch = hex
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            Err(DecodeError::InvalidCharacter { ch, index })
        }
    }
}
