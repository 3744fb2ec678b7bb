//! Middleware integration suites.
//!
//! Each module is a thin driver around one library: load bytes, hand them
//! to the library, return the library's output as plain data. The suites
//! in `tests/` compare that output against golden values with
//! `golden-harness`.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run every suite
//! cargo test -p middleware-tests
//!
//! # Run one suite
//! cargo test -p middleware-tests --test png_decode
//! ```

pub mod audio;
pub mod error;
pub mod image;
pub mod scene;

pub use error::MiddlewareError;

use golden_harness::fixtures;

/// Read a fixture from the shared data directory, with test logging enabled.
///
/// # Panics
///
/// Panics if the fixture is missing or unreadable.
pub fn load_fixture(name: &str) -> Vec<u8> {
    golden_harness::logging::init_test_logging();
    match fixtures::read_fixture(name) {
        Ok(bytes) => bytes,
        Err(e) => panic!(
            "Unable to load fixture {:?} (data root {}): {}",
            name,
            fixtures::test_data_root().display(),
            e
        ),
    }
}
