//! In-memory fakes for testing collectors without a real `/proc` or `statvfs`.
//!
//! `MockFs` simulates pseudo-files, `MockStatFs` simulates per-mount
//! filesystem statistics. Both let tests run on macOS and in CI.

use crate::collector::traits::{FileSystem, FsStats, StatFs};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file, simulating an inaccessible pseudo-file.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }
}

/// In-memory `statvfs` for testing.
///
/// Paths that were never registered fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MockStatFs {
    mounts: HashMap<PathBuf, Result<FsStats, io::ErrorKind>>,
}

impl MockStatFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mount point reporting fixed statistics.
    pub fn add_mount(&mut self, path: impl AsRef<Path>, stats: FsStats) {
        self.mounts.insert(path.as_ref().to_path_buf(), Ok(stats));
    }

    /// Registers a mount point whose statistics call always fails.
    pub fn add_failure(&mut self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.mounts.insert(path.as_ref().to_path_buf(), Err(kind));
    }
}

impl StatFs for MockStatFs {
    fn statfs(&self, path: &Path) -> io::Result<FsStats> {
        match self.mounts.get(path) {
            Some(Ok(stats)) => Ok(*stats),
            Some(Err(kind)) => Err(io::Error::new(
                *kind,
                format!("statvfs failed: {:?}", path),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mount not found: {:?}", path),
            )),
        }
    }
}
