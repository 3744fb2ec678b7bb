//! Test logging setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Output is captured per test and shown only for failures. Safe to call
/// from every test; only the first call installs anything, and an already
/// installed global subscriber is left alone.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
