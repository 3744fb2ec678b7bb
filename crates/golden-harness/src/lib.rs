//! Golden-output harness for middleware integration tests.
//!
//! Every middleware suite follows the same pattern:
//!
//! - Locate a fixture next to the test executable and read it into memory
//! - Drive the library under test
//! - Render the output bytes as lowercase hex
//! - **Compare** against a golden literal, hash or golden file
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the harness and all middleware suites
//! cargo test
//!
//! # Rewrite file-backed goldens from actual output (use with caution!)
//! GOLDEN_HARNESS_UPDATE=1 cargo test
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use golden_harness::{assert_golden_hex, fixtures};
//!
//! let bytes = fixtures::read_fixture("hello.bin").expect("fixture missing");
//! assert_golden_hex("01020304", &bytes);
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod golden;
pub mod hex;
pub mod logging;

// Re-export commonly used items
pub use error::{DecodeError, HarnessError};
pub use fixtures::{read_file, read_fixture, resolve, FixtureLocator};
pub use golden::{
    assert_golden_file, assert_golden_hash, assert_golden_hex, compare_hex, compute_hash,
    GoldenDiff, GoldenOutcome, GoldenReport,
};
