//! Golden-output comparison.
//!
//! Runtime output is checked against one of three kinds of golden value:
//!
//! - An inline hex literal (exact bytes)
//! - An inline BLAKE3 hash literal (for large or version-sensitive output)
//! - A `.hex` file under `data/golden/`, rewritable with `GOLDEN_HARNESS_UPDATE=1`
//!
//! # Example
//!
//! ```rust,ignore
//! use golden_harness::golden::{assert_golden_hex, GoldenReport};
//!
//! assert_golden_hex("00ff0a", [0x00u8, 0xff, 0x0a]);
//!
//! let mut report = GoldenReport::new();
//! report.check_hex("bc1", "0000fffffafaa9a2", &bc1_block);
//! report.check_hex("bc4", "8085000000070003", &bc4_block);
//! report.assert_all_passed();
//! ```

pub mod compare;
pub mod file;
#[macro_use]
pub mod macros;
pub mod report;

#[cfg(test)]
mod tests;

pub use compare::{
    assert_golden_hash, assert_golden_hex, compare_hash, compare_hex, compute_hash, diff_bytes,
    DiffContext, GoldenDiff, GoldenOutcome,
};
pub use file::{assert_golden_file, list_golden_files, GoldenFile};
pub use report::{CheckStatus, GoldenReport, GoldenReportEntry};
