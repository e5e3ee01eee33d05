// src/storage/os.rs
// =============================================================================
// FileSystem implementation backed by the real disk (std::fs).
// =============================================================================

use super::{AccessMode, AccessStatus, FileSystem};
use std::fs;
use std::io;
use std::path::Path;

/// The real file system. Zero-sized, so it's free to create.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn access(&self, path: &Path, mode: AccessMode) -> AccessStatus {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return status_from_error(&e),
        };

        match mode {
            AccessMode::ReadFile => {
                if !metadata.is_file() {
                    return AccessStatus::NotFound;
                }
                // Opening is the only reliable way to know we may read it
                match fs::File::open(path) {
                    Ok(_) => AccessStatus::Ok,
                    Err(e) => status_from_error(&e),
                }
            }
            AccessMode::WriteDir => {
                if !metadata.is_dir() {
                    return AccessStatus::NotFound;
                }
                // Permission bits don't say whether *this* process may write
                // (root, ACLs, read-only mounts), so create and drop a real file
                match tempfile::NamedTempFile::new_in(path) {
                    Ok(_) => AccessStatus::Ok,
                    Err(e) => status_from_error(&e),
                }
            }
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

fn status_from_error(error: &io::Error) -> AccessStatus {
    match error.kind() {
        io::ErrorKind::NotFound => AccessStatus::NotFound,
        _ => AccessStatus::PermissionDenied,
    }
}
