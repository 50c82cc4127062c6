//! Filesystem utilities.
//!
//! [`Workspace`] is the capability the extractor and generator use to touch
//! files, so both can be driven by an in-memory fake in tests.
//! [`DiskWorkspace`] is the real implementation.

use std::io;
use std::path::Path;

use crate::error::Result;

/// File operations needed by the scan and scaffold steps.
pub trait Workspace {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create or truncate `path` with `contents`. The parent must exist.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Create `path` and missing parents. An existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`Workspace`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWorkspace;

impl Workspace for DiskWorkspace {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(ws: &dyn Workspace, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !ws.exists(path) {
        ws.create_dir_all(path)?;
    }
    Ok(())
}

/// Read a file to string, returning None if it doesn't exist.
pub fn read_optional(ws: &dyn Workspace, path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if ws.exists(path) {
        Ok(Some(ws.read_to_string(path)?))
    } else {
        Ok(None)
    }
}
