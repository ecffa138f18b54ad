//! Application layer errors.
//!
//! These errors represent failures while applying a plan, not problems with
//! the plan itself. Plan problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    ProvisioningFailed { path: PathBuf, reason: String },

    /// Checking whether a file exists failed for a reason other than absence.
    #[error("Failed to check {path}: {reason}")]
    ExistenceCheckFailed { path: PathBuf, reason: String },

    /// Creating a file or writing its content failed.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// The external build toolchain failed or could not be started.
    #[error("Command `{command}` failed: {reason}")]
    ToolchainFailed { command: String, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProvisioningFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file sits where the directory should go".into(),
            ],
            Self::ExistenceCheckFailed { path, .. } => vec![
                format!("Could not inspect: {}", path.display()),
                "Check the permissions of the parent directory".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure were kept; re-run once fixed".into(),
            ],
            Self::ToolchainFailed { command, .. } => vec![
                format!("`{}` did not succeed", command),
                "Ensure the Go toolchain is installed and in your PATH".into(),
                "Use --skip-toolchain to scaffold files only".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProvisioningFailed { .. }
            | Self::ExistenceCheckFailed { .. }
            | Self::WriteFailed { .. } => ErrorCategory::Filesystem,
            Self::ToolchainFailed { .. } => ErrorCategory::Toolchain,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
