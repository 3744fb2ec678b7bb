//! Byte-level golden comparison.
//!
//! Output bytes are compared against a golden hex literal byte-for-byte.
//! A mismatch reports the first differing offset with surrounding context;
//! a malformed literal is reported as an error instead, so a broken golden
//! value is never confused with a regression.

use std::fmt;

use crate::error::HarnessError;
use crate::hex;

/// Number of context bytes kept on each side of a difference.
const CONTEXT_BYTES: usize = 8;

/// Outcome of comparing output against a golden value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoldenOutcome {
    /// Output matches byte-for-byte.
    Match,
    /// Output differs; details about the first difference.
    Mismatch(GoldenDiff),
}

impl GoldenOutcome {
    /// Whether the output matched.
    pub fn is_match(&self) -> bool {
        matches!(self, GoldenOutcome::Match)
    }

    /// The mismatch details, if any.
    pub fn diff(&self) -> Option<&GoldenDiff> {
        match self {
            GoldenOutcome::Match => None,
            GoldenOutcome::Mismatch(diff) => Some(diff),
        }
    }
}

/// The first byte difference between golden and actual output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenDiff {
    /// Byte offset where the difference was found.
    pub offset: usize,
    /// Golden byte at `offset`, `None` if the golden value ends before it.
    pub expected: Option<u8>,
    /// Actual byte at `offset`, `None` if the output ends before it.
    pub actual: Option<u8>,
    /// Length of the golden value in bytes.
    pub expected_len: usize,
    /// Length of the actual output in bytes.
    pub actual_len: usize,
    /// Golden bytes around the difference.
    pub expected_context: DiffContext,
    /// Actual bytes around the difference.
    pub actual_context: DiffContext,
}

/// Bytes before and after a difference (up to 8 each).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffContext {
    /// Bytes before the difference.
    pub before: Vec<u8>,
    /// Bytes after the difference.
    pub after: Vec<u8>,
}

impl fmt::Display for GoldenDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (golden {} bytes, actual {} bytes)",
            self.offset,
            format_byte(self.expected),
            format_byte(self.actual),
            self.expected_len,
            self.actual_len
        )?;
        write!(
            f,
            "\n  Golden: {}",
            format_context(&self.expected_context, self.expected)
        )?;
        write!(
            f,
            "\n  Actual: {}",
            format_context(&self.actual_context, self.actual)
        )
    }
}

fn format_byte(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("0x{:02x}", b),
        None => "<end>".to_string(),
    }
}

fn format_context(context: &DiffContext, at: Option<u8>) -> String {
    let at = match at {
        Some(b) => format!("[{}]", hex::encode([b])),
        None => "[..]".to_string(),
    };
    format!(
        "{} {} {}",
        hex::encode(&context.before),
        at,
        hex::encode(&context.after)
    )
    .trim()
    .to_string()
}

/// Find the first difference between golden and actual bytes.
///
/// When one buffer is a prefix of the other, the difference is reported at
/// the shorter length.
pub fn diff_bytes(expected: &[u8], actual: &[u8]) -> Option<GoldenDiff> {
    let offset = expected
        .iter()
        .zip(actual.iter())
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(GoldenDiff {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        expected_len: expected.len(),
        actual_len: actual.len(),
        expected_context: extract_context(expected, offset),
        actual_context: extract_context(actual, offset),
    })
}

/// Extract context bytes around a given offset.
pub(crate) fn extract_context(data: &[u8], offset: usize) -> DiffContext {
    let offset = offset.min(data.len());
    let before_start = offset.saturating_sub(CONTEXT_BYTES);
    let after_start = (offset + 1).min(data.len());
    let after_end = (offset + 1 + CONTEXT_BYTES).min(data.len());

    DiffContext {
        before: data[before_start..offset].to_vec(),
        after: data[after_start..after_end].to_vec(),
    }
}

/// Compare output bytes against a golden hex literal.
///
/// The literal may use either case; comparison is on decoded bytes.
///
/// # Errors
///
/// Returns [`HarnessError::Decode`] when the literal is not valid hex.
pub fn compare_hex(expected_hex: &str, actual: &[u8]) -> Result<GoldenOutcome, HarnessError> {
    let expected = hex::decode(expected_hex)?;
    Ok(match diff_bytes(&expected, actual) {
        None => GoldenOutcome::Match,
        Some(diff) => GoldenOutcome::Mismatch(diff),
    })
}

/// Compare output bytes against a golden BLAKE3 hash (64 hex characters).
///
/// Use this for large or library-version-sensitive outputs where an inline
/// hex literal would be unwieldy.
///
/// # Errors
///
/// Returns [`HarnessError::Decode`] when the hash is not valid hex, or
/// [`HarnessError::HashLength`] when it is not 32 bytes long.
pub fn compare_hash(expected_hash: &str, actual: &[u8]) -> Result<GoldenOutcome, HarnessError> {
    let expected = hex::decode(expected_hash)?;
    if expected.len() != blake3::OUT_LEN {
        return Err(HarnessError::HashLength {
            expected: blake3::OUT_LEN,
            actual: expected.len(),
        });
    }

    let actual_hash = blake3::hash(actual);
    Ok(match diff_bytes(&expected, actual_hash.as_bytes()) {
        None => GoldenOutcome::Match,
        Some(diff) => GoldenOutcome::Mismatch(diff),
    })
}

/// Compute the BLAKE3 hash of data as lowercase hex.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Assert output matches a golden hex literal.
///
/// # Panics
///
/// Panics with the first difference on mismatch, or with a distinct message
/// when the literal itself is malformed.
pub fn assert_golden_hex(expected_hex: &str, actual: impl AsRef<[u8]>) {
    let actual = actual.as_ref();
    match compare_hex(expected_hex, actual) {
        Ok(GoldenOutcome::Match) => {}
        Ok(GoldenOutcome::Mismatch(diff)) => panic!(
            "Golden mismatch!\n\
             Golden: {}\n\
             Actual: {}\n\
             {}",
            expected_hex,
            hex::encode(actual),
            diff
        ),
        Err(e) => panic!("Golden literal is malformed ({}): {:?}", e, expected_hex),
    }
}

/// Assert the BLAKE3 hash of output matches a golden hash literal.
///
/// # Panics
///
/// Panics on mismatch, or with a distinct message when the hash literal is
/// malformed.
pub fn assert_golden_hash(expected_hash: &str, actual: impl AsRef<[u8]>) {
    let actual = actual.as_ref();
    match compare_hash(expected_hash, actual) {
        Ok(GoldenOutcome::Match) => {}
        Ok(GoldenOutcome::Mismatch(_)) => panic!(
            "Golden hash mismatch!\n\
             Golden hash: {}\n\
             Actual hash: {}\n\
             Output size: {} bytes",
            expected_hash,
            compute_hash(actual),
            actual.len()
        ),
        Err(e) => panic!("Golden hash is malformed ({}): {:?}", e, expected_hash),
    }
}
