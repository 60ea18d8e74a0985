//! [`ScriptDir`]: a temporary directory for on-disk script fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that script files can be written into.
///
/// # Example
///
/// ```rust
/// use script_test_utils::dir::ScriptDir;
///
/// let dir = ScriptDir::new();
/// let path = dir.write_script("hello.py", "print('hi')\n");
/// assert!(path.is_file());
/// ```
pub struct ScriptDir {
    temp_dir: TempDir,
}

impl Default for ScriptDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("ScriptDir::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a UTF-8 script and return its path.
    pub fn write_script(&self, name: &str, source: &str) -> PathBuf {
        self.write_bytes(name, source.as_bytes())
    }

    /// Write raw bytes, for encodings other than UTF-8.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, bytes)
            .unwrap_or_else(|e| panic!("ScriptDir::write_bytes: failed to write {name}: {e}"));
        path
    }
}
