//! Local filesystem adapter using std::fs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use resgen_core::application::ports::Filesystem;
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        // The writer is dropped (and the handle closed) on every return path,
        // including a failed write_all or flush.
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(bytes)?;
        writer.flush()?;
        trace!(path = %path.display(), bytes = bytes.len(), "File written");
        Ok(())
    }
}
