/// File access used by the file-based construction pipelines

use std::io::ErrorKind;
use std::path::PathBuf;
use crate::error::{Error, Result};

/// Read-only file access
///
/// Paths are the ones callers pass to `load_*` functions, unmodified.
pub trait FileSystem: Send + Sync {
    /// Read a whole file as bytes
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>>;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes)
            .map_err(|_| Error::InvalidResource(format!("'{}' is not valid UTF-8", path)))
    }
}

/// File system rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryFileSystem {
    root: PathBuf,
}

impl DirectoryFileSystem {
    /// Resolve every path relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl FileSystem for DirectoryFileSystem {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        std::fs::read(self.root.join(path)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::NotFound(path.to_string()),
            _ => Error::BackendError(format!("Failed to read '{}': {}", path, err)),
        })
    }
}

#[cfg(test)]
#[path = "file_system_tests.rs"]
mod tests;
