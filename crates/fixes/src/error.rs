// ABOUTME: Error types for blogfix page operations.
// ABOUTME: Provides FixError enum with Read, Write, and ListDir variants carrying io sources.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while selecting or rewriting pages.
///
/// `Read` and `Write` are per-file failures the batch driver catches and
/// folds into the run report. `ListDir` means the blog directory itself is
/// inaccessible and aborts the run.
#[derive(Debug, Error)]
pub enum FixError {
    /// Failed to read a page into memory.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rewritten page back.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the blog directory.
    #[error("failed to list {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixError {
    /// Creates a Read error for `path`.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FixError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a Write error for `path`.
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FixError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a ListDir error for `path`.
    pub fn list_dir(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FixError::ListDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
