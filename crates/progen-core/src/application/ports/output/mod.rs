//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `progen-adapters` crate provides implementations.

use crate::error::ProgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `progen_adapters::filesystem::LocalFilesystem` (production)
/// - `progen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Callers pass fully joined paths; adapters do not know the project root
/// - `path_exists` separates "absent" from "could not tell"
/// - `create_file` never replaces an existing file
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories (`0o755` on Unix).
    ///
    /// An existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> ProgenResult<()>;

    /// `Ok(true)` if something exists at `path`, `Ok(false)` if nothing does,
    /// `Err` if existence could not be determined.
    fn path_exists(&self, path: &Path) -> ProgenResult<bool>;

    /// Create a new file and write all of `content` to it.
    ///
    /// Fails if the file already exists or the write is incomplete.
    fn create_file(&self, path: &Path, content: &str) -> ProgenResult<()>;
}

/// Port for the language toolchain run after files are in place.
///
/// Implemented by:
/// - `progen_adapters::toolchain::GoToolchain` (`go mod init` / `go mod tidy`)
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// Dependency manifest whose presence means the module is initialised.
    fn manifest_name(&self) -> &str;

    /// Initialise a module named `module_path` in `root`.
    fn init_module(&self, root: &Path, module_path: &str) -> ProgenResult<()>;

    /// Resolve and prune dependencies in `root`.
    fn tidy(&self, root: &Path) -> ProgenResult<()>;
}
