//! In-memory filesystem adapter for testing.
//!
//! Besides plain storage it can simulate the failures the provisioning
//! services must handle: read-only directories and paths whose existence
//! cannot be checked.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use progen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ProgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Put a file in place without any checks (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
    }

    /// Refuse new files directly inside `dir`.
    pub fn make_read_only(&self, dir: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(dir.into());
        }
    }

    /// Make `path_exists` fail for `path`.
    pub fn make_unreadable(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.into());
        }
    }

    /// `true` if `path` was created as a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// All files with their content, sorted by path.
    pub fn snapshot(&self) -> Vec<(PathBuf, String)> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner
            .files
            .iter()
            .map(|(p, c)| (p.clone(), c.clone()))
            .collect();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ProgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::ProvisioningFailed {
                    path: path.to_path_buf(),
                    reason: format!("{} is not a directory", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn path_exists(&self, path: &Path) -> ProgenResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::ExistenceCheckFailed {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        Ok(inner.exists(path))
    }

    fn create_file(&self, path: &Path, content: &str) -> ProgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let write_failed = |reason: &str| -> ProgenResult<()> {
            Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into())
        };

        if inner.exists(path) {
            return write_failed("file exists");
        }

        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return write_failed("parent directory does not exist");
        }
        if inner.read_only.contains(parent) {
            return write_failed("permission denied");
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
