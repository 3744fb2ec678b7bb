//! Error types for fixture lookup, hex decoding and golden files.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed hex input.
///
/// Kept separate from golden mismatches: a `DecodeError` means the expected
/// value itself is broken, not that the library output regressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Hex strings encode whole bytes, so the length must be even.
    #[error("hex string has odd length {len}")]
    OddLength { len: usize },
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The running executable's location could not be determined.
    #[error("unable to determine the test executable path")]
    PathResolution,

    /// Fixture file does not exist.
    #[error("fixture not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Fixture exists but could not be read.
    #[error("unable to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected value is not valid hex.
    #[error("malformed hex: {0}")]
    Decode(#[from] DecodeError),

    /// Golden hash literal decodes to the wrong number of bytes.
    #[error("golden hash must be {expected} bytes, got {actual}")]
    HashLength { expected: usize, actual: usize },

    /// Update mode could not write a golden file.
    #[error("unable to write golden file {}: {source}", path.display())]
    GoldenWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarnessError {
    /// Returns true for errors meaning "the fixture is not there".
    ///
    /// An unresolvable executable path counts as missing, since no fixture
    /// can be found without it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HarnessError::FileNotFound { .. } | HarnessError::PathResolution
        )
    }
}
