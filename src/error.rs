// src/error.rs
// =============================================================================
// Every way a sitemap run can fail, as one enum.
//
// All of these are fatal: the entry point prints the message and exits.
// The generator itself never terminates the process, it just returns one
// of these variants so the logic stays testable.
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error from attributes
// - #[source]: Keeps the underlying io::Error attached for context
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("The directory '{}' is not writable. Grant write rights and try again.", .0.display())]
    OutputDirNotWritable(PathBuf),

    #[error("The directory '{}' does not exist.", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Cannot read '{}'. Make sure it exists in '{}'.", .path.display(), .dir.display())]
    InputNotFound { path: PathBuf, dir: PathBuf },

    #[error("Cannot read '{}'. Make sure it is readable.", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("No valid keywords found in {}", .0.display())]
    NoKeywords(PathBuf),

    #[error("Failed to write {}. Check permissions.", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot load config file '{}': {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },
}

impl SitemapError {
    /// Configuration problems are usage errors, everything else is a failed run.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::ConfigFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;
