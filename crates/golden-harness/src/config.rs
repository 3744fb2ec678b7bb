//! Environment-driven configuration.

use std::path::PathBuf;

/// Overrides the test data root (absolute, or relative to the executable's directory).
pub const DATA_DIR_ENV: &str = "GOLDEN_HARNESS_DATA_DIR";

/// When `1`/`true`, golden files are rewritten from actual output.
pub const UPDATE_ENV: &str = "GOLDEN_HARNESS_UPDATE";

/// Fixed offset from the test executable's directory to the shared data directory.
///
/// Cargo places test binaries in `<target>/<profile>/deps/`, three levels
/// below the workspace root when the target directory is the default one.
pub const TEST_DATA_OFFSET: &str = "../../../data";

/// Whether to update golden files instead of comparing.
pub fn should_update_goldens() -> bool {
    std::env::var(UPDATE_ENV)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

/// Data directory override, if set and non-empty.
pub fn data_dir_override() -> Option<PathBuf> {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
