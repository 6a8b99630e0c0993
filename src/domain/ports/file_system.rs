//! FileSystem port - read access for file-sourced parameters
//!
//! Lets the parameter resolver read `$$`-prefixed files without depending on
//! a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    pub(crate) fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test mocks - in-memory maps that record every access
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}
