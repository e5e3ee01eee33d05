// src/storage/mod.rs
// =============================================================================
// This module is the only place the generator touches the file system.
//
// Instead of calling std::fs directly, the generator talks to a FileSystem
// trait. That gives us two implementations:
// - OsFileSystem: the real disk, used by the binary
// - MemoryFileSystem: an in-memory map, used by tests
//
// The pre-flight check (can we write the output directory? can we read the
// input file?) is a method on the trait too, so permission problems are
// ordinary return values instead of a process exit.
//
// Rust concepts:
// - Traits: Shared behaviour that different types implement
// - Generics with ?Sized: Lets callers pass either a concrete type or a
//   trait object (&dyn FileSystem)
// =============================================================================

#[cfg(test)]
mod memory;
mod os;

#[cfg(test)]
pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use std::io;
use std::path::Path;

/// What the pre-flight check needs to be able to do with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// The path must be an existing, readable file
    ReadFile,
    /// The path must be an existing directory we can create files in
    WriteDir,
}

/// Outcome of a pre-flight capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Ok,
    PermissionDenied,
    NotFound,
}

pub trait FileSystem {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Checks whether `path` can be used in the given mode, without changing anything.
    fn access(&self, path: &Path, mode: AccessMode) -> AccessStatus;

    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or fully overwrites the file at `path`.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling std::fs?
//    - The generator only needs four operations (exists, access, read, write)
//    - Putting them behind a trait means tests can swap in a fake disk
//    - No temp directories or cleanup needed for most tests
//
// 2. What does &self mean on write()?
//    - write() takes &self, not &mut self
//    - The OS version doesn't need mutation at all
//    - The memory version uses RefCell for interior mutability
//    - That keeps the trait simple to call from anywhere
// -----------------------------------------------------------------------------
