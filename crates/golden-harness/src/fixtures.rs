//! Fixture lookup anchored to the running test executable.
//!
//! Test binaries are launched from arbitrary working directories by
//! different runners, so fixture paths are derived from the executable's
//! own location: `<exe dir>/../../../data/<name>`. The data root is
//! computed once per process and cached.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use walkdir::WalkDir;

use crate::config;
use crate::error::HarnessError;

/// Resolves fixture names against a test data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLocator {
    root: PathBuf,
}

impl FixtureLocator {
    /// Create a locator rooted at `root` (normalized, not canonicalized).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: normalize(root.as_ref()),
        }
    }

    /// Build a locator from the running executable's directory.
    ///
    /// Honors `GOLDEN_HARNESS_DATA_DIR`. Unlike [`global`], nothing is cached.
    pub fn from_executable() -> Result<Self, HarnessError> {
        let exe = std::env::current_exe().map_err(|_| HarnessError::PathResolution)?;
        let exe_dir = exe.parent().ok_or(HarnessError::PathResolution)?;
        Ok(Self {
            root: data_root_from(exe_dir, config::data_dir_override()),
        })
    }

    /// The test data root. Empty when the executable path was unavailable.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a named fixture. Existence is not checked.
    ///
    /// Returns the empty path when the root itself is empty, so a later
    /// read reports "not found" instead of picking up a file relative to
    /// the working directory.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        if self.root.as_os_str().is_empty() {
            return PathBuf::new();
        }
        normalize(&self.root.join(name))
    }

    /// Check whether a named fixture exists.
    pub fn exists(&self, name: impl AsRef<Path>) -> bool {
        let path = self.resolve(name);
        !path.as_os_str().is_empty() && path.exists()
    }

    /// Read a named fixture into memory.
    pub fn read(&self, name: impl AsRef<Path>) -> Result<Vec<u8>, HarnessError> {
        let path = self.resolve(name);
        read_file(&path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Unable to open fixture");
        })
    }

    /// List fixtures under `subdir` with the given extension, recursively and sorted.
    pub fn list(&self, subdir: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
        let dir = self.resolve(subdir);
        if dir.as_os_str().is_empty() {
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().map(|e| e == extension).unwrap_or(false))
            .collect();
        files.sort();
        files
    }
}

/// Directory containing the running executable, computed once.
pub fn executable_dir() -> Option<&'static Path> {
    static DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
    DIR.get_or_init(|| {
        let exe = std::env::current_exe().ok()?;
        exe.parent().map(Path::to_path_buf)
    })
    .as_deref()
}

/// Process-wide locator rooted at the shared test data directory.
pub fn global() -> &'static FixtureLocator {
    static LOCATOR: OnceLock<FixtureLocator> = OnceLock::new();
    LOCATOR.get_or_init(|| {
        let override_dir = config::data_dir_override();
        let root = match (executable_dir(), override_dir) {
            (Some(exe_dir), override_dir) => data_root_from(exe_dir, override_dir),
            (None, Some(dir)) if dir.is_absolute() => normalize(&dir),
            (None, _) => {
                tracing::warn!("Unable to determine executable path; fixtures will not resolve");
                PathBuf::new()
            }
        };
        tracing::debug!(root = %root.display(), "Resolved test data root");
        FixtureLocator { root }
    })
}

/// The shared test data root.
pub fn test_data_root() -> &'static Path {
    global().root()
}

/// Path to a named fixture under the shared test data root.
pub fn resolve(name: impl AsRef<Path>) -> PathBuf {
    global().resolve(name)
}

/// Like [`resolve`], but reports an unresolvable executable path as an error.
pub fn try_resolve(name: impl AsRef<Path>) -> Result<PathBuf, HarnessError> {
    let path = resolve(name);
    if path.as_os_str().is_empty() {
        return Err(HarnessError::PathResolution);
    }
    Ok(path)
}

/// Read a named fixture from the shared test data root.
pub fn read_fixture(name: impl AsRef<Path>) -> Result<Vec<u8>, HarnessError> {
    global().read(name)
}

/// Read a whole file in binary mode.
///
/// The handle is released before returning on every path; on failure no
/// partial contents are returned.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, HarnessError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(HarnessError::FileNotFound {
            path: PathBuf::new(),
        });
    }

    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => HarnessError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => HarnessError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Lexically resolve `.` and `..` segments.
///
/// `..` never climbs above a root; leading `..` on a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn data_root_from(exe_dir: &Path, override_dir: Option<PathBuf>) -> PathBuf {
    let root = match override_dir {
        // Joining an absolute path replaces the base.
        Some(dir) => exe_dir.join(dir),
        None => exe_dir.join(config::TEST_DATA_OFFSET),
    };
    let root = normalize(&root);
    root.canonicalize().unwrap_or(root)
}
