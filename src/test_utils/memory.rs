//! In-memory [`Workspace`] for exercising the extractor and generator
//! without touching disk.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::Workspace;
use crate::utils::paths::normalize;

/// Files and directories held in memory, with optional injected failures.
///
/// Writes require the parent directory to exist, like the real filesystem.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    failing: BTreeSet<PathBuf>,
    writes: RefCell<Vec<PathBuf>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = normalize(path.as_ref());
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.to_string());
        self
    }

    /// Make every read, write or mkdir of `path` fail.
    #[must_use]
    pub fn failing_at(mut self, path: impl AsRef<Path>) -> Self {
        self.failing.insert(normalize(path.as_ref()));
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(&normalize(path.as_ref())).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(&normalize(path.as_ref()))
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.failing.contains(path) {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected failure at {}", path.display()),
            ))
        } else {
            Ok(())
        }
    }
}

impl Workspace for MemoryWorkspace {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = normalize(path);
        self.check(&path)?;
        self.files
            .borrow()
            .get(&path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.files.borrow().contains_key(&path) || self.dirs.borrow().contains(&path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let path = normalize(path);
        self.check(&path)?;
        let parent_ok = path
            .parent()
            .is_none_or(|parent| parent.as_os_str().is_empty() || self.dirs.borrow().contains(parent));
        if !parent_ok {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            ));
        }
        self.files.borrow_mut().insert(path.clone(), contents.to_string());
        self.writes.borrow_mut().push(path);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        self.check(&path)?;
        if self.files.borrow().contains_key(&path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        self.add_dirs(&path);
        Ok(())
    }
}
