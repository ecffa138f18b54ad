//! Go toolchain adapter: `go mod init` and `go mod tidy` as subprocesses.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, instrument};

use progen_core::{
    application::{ApplicationError, ports::Toolchain},
    error::ProgenResult,
};

/// Manifest written by `go mod init`.
pub const GO_MANIFEST: &str = "go.mod";

/// Why a toolchain command did not succeed.
#[derive(Debug, Error)]
enum RunError {
    #[error("could not start: {0}")]
    Spawn(#[source] io::Error),

    #[error("exited with {0}")]
    Status(ExitStatus),
}

/// Runs the `go` binary (or a configured replacement) inside the project root.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: String,
}

impl GoToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, root: &Path, args: &[&str]) -> ProgenResult<()> {
        let command = std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(command = %command, root = %root.display(), "running toolchain command");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            // stdout is reserved for the run summary
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(RunError::Spawn)
            .and_then(|status| {
                if status.success() {
                    Ok(status)
                } else {
                    Err(RunError::Status(status))
                }
            });

        match status {
            Ok(_) => Ok(()),
            Err(e) => Err(ApplicationError::ToolchainFailed {
                command,
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new("go")
    }
}

impl Toolchain for GoToolchain {
    fn manifest_name(&self) -> &str {
        GO_MANIFEST
    }

    #[instrument(skip(self, root), fields(root = %root.display()))]
    fn init_module(&self, root: &Path, module_path: &str) -> ProgenResult<()> {
        self.run(root, &["mod", "init", module_path])
    }

    #[instrument(skip(self, root), fields(root = %root.display()))]
    fn tidy(&self, root: &Path) -> ProgenResult<()> {
        self.run(root, &["mod", "tidy"])
    }
}
