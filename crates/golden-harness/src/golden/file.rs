//! Golden values stored as `.hex` files under `data/golden/`.
//!
//! Each file holds one lowercase hex string, optionally followed by a
//! newline. With `GOLDEN_HARNESS_UPDATE=1` the file is rewritten from the
//! actual output instead of being compared.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::HarnessError;
use crate::fixtures;
use crate::golden::compare::{compare_hex, GoldenOutcome};
use crate::hex;

/// Subdirectory of the test data root holding golden files.
pub const GOLDEN_DIR: &str = "golden";

/// A golden file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenFile {
    path: PathBuf,
}

impl GoldenFile {
    /// The golden file `data/golden/<name>.hex`.
    pub fn named(name: &str) -> Self {
        Self {
            path: fixtures::resolve(Path::new(GOLDEN_DIR).join(format!("{}.hex", name))),
        }
    }

    /// A golden file at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the golden file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored hex string, trimmed.
    pub fn read(&self) -> Result<String, HarnessError> {
        let bytes = fixtures::read_file(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }

    /// Write `actual` as the new golden value.
    pub fn write(&self, actual: &[u8]) -> Result<(), HarnessError> {
        let write_err = |source: std::io::Error| HarnessError::GoldenWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, format!("{}\n", hex::encode(actual))).map_err(write_err)
    }

    /// Compare `actual` against the file, or rewrite it in update mode.
    pub fn check(&self, actual: &[u8]) -> Result<GoldenOutcome, HarnessError> {
        self.check_with_mode(actual, config::should_update_goldens())
    }

    pub(crate) fn check_with_mode(
        &self,
        actual: &[u8],
        update: bool,
    ) -> Result<GoldenOutcome, HarnessError> {
        if update {
            self.write(actual)?;
            tracing::warn!(path = %self.path.display(), bytes = actual.len(), "Updated golden file");
            return Ok(GoldenOutcome::Match);
        }

        let expected = self.read()?;
        compare_hex(&expected, actual)
    }

    /// Assert `actual` matches the file.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, when the file is missing or unreadable, or when
    /// its contents are not valid hex.
    pub fn assert_matches(&self, actual: impl AsRef<[u8]>) {
        let actual = actual.as_ref();
        match self.check(actual) {
            Ok(GoldenOutcome::Match) => {}
            Ok(GoldenOutcome::Mismatch(diff)) => panic!(
                "Golden file mismatch: {}\n\
                 Actual: {}\n\
                 {}\n\
                 Rerun with {}=1 to accept the new output.",
                self.path.display(),
                hex::encode(actual),
                diff,
                config::UPDATE_ENV
            ),
            Err(e) if e.is_not_found() => panic!(
                "Golden file missing: {}\nRerun with {}=1 to create it.",
                self.path.display(),
                config::UPDATE_ENV
            ),
            Err(e) => panic!("Golden file unusable: {}", e),
        }
    }
}

/// Assert output matches `data/golden/<name>.hex`.
///
/// # Panics
///
/// See [`GoldenFile::assert_matches`].
pub fn assert_golden_file(name: &str, actual: impl AsRef<[u8]>) {
    GoldenFile::named(name).assert_matches(actual);
}

/// All golden files under the shared test data root.
pub fn list_golden_files() -> Vec<PathBuf> {
    fixtures::global().list(GOLDEN_DIR, "hex")
}
