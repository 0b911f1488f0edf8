//! [`TestWorkspace`]: a temporary directory with a catalog and manifests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::CATALOG;

/// Name the catalog is written under
pub const CATALOG_FILE: &str = "precommit-config.yml";

/// A temporary project directory with helpers for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use augment_test_utils::workspace::TestWorkspace;
///
/// let ws = TestWorkspace::new().with_catalog();
/// ws.write(".pre-commit-config.yaml", "repos:\n");
/// assert!(ws.path(".pre-commit-config.yaml").exists());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write the fixture catalog as `precommit-config.yml`.
    pub fn with_catalog(self) -> Self {
        self.write(CATALOG_FILE, CATALOG);
        self
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `relative` as UTF-8.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }
}
