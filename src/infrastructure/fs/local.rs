//! Local disk access for `$$` file parameters

use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Reads parameter files straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
