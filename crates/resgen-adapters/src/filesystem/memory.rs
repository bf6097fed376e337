//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use resgen_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep a handle while the
/// service owns a boxed copy.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

fn poisoned() -> io::Error {
    io::Error::other("memory filesystem lock poisoned")
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Make a seeded file fail the readability probe.
    pub fn mark_unreadable(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.as_ref().to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_readable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) && !inner.unreadable.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists and is a file", current.display()),
                ));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        if inner.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            ));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "Parent directory does not exist",
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_is_probed_as_readable_file() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tpl/a.txt", "x");

        let path = Path::new("/tpl/a.txt");
        assert!(fs.exists(path) && fs.is_file(path) && fs.is_readable(path));
        assert!(fs.is_dir(Path::new("/tpl")));
    }

    #[test]
    fn unreadable_marker_only_affects_readability() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tpl/a.txt", "x");
        fs.mark_unreadable("/tpl/a.txt");

        let path = Path::new("/tpl/a.txt");
        assert!(fs.is_file(path));
        assert!(!fs.is_readable(path));
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("/out/f.txt"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/f.txt"), b"x").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/f.txt")).unwrap(), b"x");
        assert_eq!(fs.list_files(), vec![PathBuf::from("/out/f.txt")]);
    }

    #[test]
    fn directory_cannot_pass_through_a_file() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/build/generated-resources", "oops");

        let err = fs
            .create_dir_all(Path::new("/build/generated-resources/nested"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
