// src/storage/memory.rs
// =============================================================================
// An in-memory FileSystem for tests.
//
// Files live in a BTreeMap keyed by path. Directories are tracked
// separately so the pre-flight check has something to look at. Individual
// paths can be marked unreadable or unwritable to simulate permission
// problems without touching the real disk.
//
// Rust concepts:
// - RefCell: Mutate data behind a shared reference (&self), checked at runtime
// - BTreeMap / BTreeSet: Sorted collections, so listings are deterministic
// =============================================================================

use super::{AccessMode, AccessStatus, FileSystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: BTreeSet<PathBuf>,
    read_only_dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(dir.into());
        self
    }

    /// Registers a file with the given contents.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Directory exists but nothing may be created inside it.
    pub fn with_read_only_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.dirs.insert(dir.clone());
        self.read_only_dirs.insert(dir);
        self
    }

    /// File exists but can't be read.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Any write to this exact path fails.
    pub fn with_failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    /// Returns the contents of a file as text, if it exists.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Every file path currently stored, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.borrow().contains_key(path)
    }

    fn access(&self, path: &Path, mode: AccessMode) -> AccessStatus {
        match mode {
            AccessMode::ReadFile => {
                if !self.files.borrow().contains_key(path) {
                    AccessStatus::NotFound
                } else if self.unreadable.contains(path) {
                    AccessStatus::PermissionDenied
                } else {
                    AccessStatus::Ok
                }
            }
            AccessMode::WriteDir => {
                if !self.dirs.contains(path) {
                    AccessStatus::NotFound
                } else if self.read_only_dirs.contains(path) {
                    AccessStatus::PermissionDenied
                } else {
                    AccessStatus::Ok
                }
            }
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent_read_only = path
            .parent()
            .map(|parent| self.read_only_dirs.contains(parent))
            .unwrap_or(false);

        if parent_read_only || self.failing_writes.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused"));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_reports_each_status() {
        let fs = MemoryFileSystem::new()
            .with_dir("/site")
            .with_read_only_dir("/locked")
            .with_file("/site/car.txt", "toyota")
            .with_file("/site/secret.txt", "x")
            .with_unreadable("/site/secret.txt");

        assert_eq!(fs.access(Path::new("/site"), AccessMode::WriteDir), AccessStatus::Ok);
        assert_eq!(
            fs.access(Path::new("/locked"), AccessMode::WriteDir),
            AccessStatus::PermissionDenied
        );
        assert_eq!(fs.access(Path::new("/nope"), AccessMode::WriteDir), AccessStatus::NotFound);
        assert_eq!(
            fs.access(Path::new("/site/car.txt"), AccessMode::ReadFile),
            AccessStatus::Ok
        );
        assert_eq!(
            fs.access(Path::new("/site/secret.txt"), AccessMode::ReadFile),
            AccessStatus::PermissionDenied
        );
    }

    #[test]
    fn test_write_overwrites() {
        let fs = MemoryFileSystem::new().with_dir("/site");
        let path = Path::new("/site/sitemap-1.xml");

        fs.write(path, b"old").unwrap();
        fs.write(path, b"new").unwrap();

        assert_eq!(fs.contents(path).as_deref(), Some("new"));
        assert_eq!(fs.paths().len(), 1);
    }

    #[test]
    fn test_failing_write() {
        let fs = MemoryFileSystem::new()
            .with_dir("/site")
            .with_failing_write("/site/sitemap-index.xml");

        assert!(fs.write(Path::new("/site/sitemap-index.xml"), b"x").is_err());
        assert!(!fs.exists(Path::new("/site/sitemap-index.xml")));
    }
}
