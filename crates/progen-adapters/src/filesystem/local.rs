//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use progen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ProgenResult,
};

/// Mode for every directory the generator creates.
pub const DIRECTORY_MODE: u32 = 0o755;

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
    fn create_dir_all(&self, path: &Path) -> ProgenResult<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIRECTORY_MODE);
        }
        builder.create(path).map_err(|e| {
            ApplicationError::ProvisioningFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn path_exists(&self, path: &Path) -> ProgenResult<bool> {
        // Do not follow symlinks: a dangling link still occupies the path.
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ApplicationError::ExistenceCheckFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn create_file(&self, path: &Path, content: &str) -> ProgenResult<()> {
        write_new(path, content).map_err(|e| {
            ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// `create_new` guarantees an existing file is never truncated; `write_all`
/// turns short writes into errors.
fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    fill_or_remove(path, file, content)
}

/// Write `content` to the freshly created `path`. On failure the partial file
/// is removed, so the next run does not mistake it for a finished one.
fn fill_or_remove<W: Write>(path: &Path, mut file: W, content: &str) -> io::Result<()> {
    let written = file
        .write_all(content.as_bytes())
        .and_then(|()| file.flush());
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "could not remove partial file");
        }
        return Err(e);
    }
    Ok(())
}
