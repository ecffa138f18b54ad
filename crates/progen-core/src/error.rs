//! Unified error handling for progen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for progen core operations.
#[derive(Debug, Error, Clone)]
pub enum ProgenError {
    /// Errors from the domain layer (invalid scaffold plan).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem or toolchain failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ProgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Toolchain,
    Internal,
}

/// Convenient result type alias.
pub type ProgenResult<T> = Result<T, ProgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn application_errors_keep_their_category() {
        let err: ProgenError = ApplicationError::WriteFailed {
            path: PathBuf::from("README.md"),
            reason: "read-only".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert!(err.to_string().contains("README.md"));
    }

    #[test]
    fn toolchain_errors_suggest_skipping() {
        let err: ProgenError = ApplicationError::ToolchainFailed {
            command: "go mod tidy".into(),
            reason: "exit status 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Toolchain);
        assert!(err.suggestions().iter().any(|s| s.contains("--skip-toolchain")));
    }

    #[test]
    fn root_error_only_wraps_layer_errors() {
        let err: ProgenError = ApplicationError::StoreLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);

        let err: ProgenError = DomainError::EmptyPlan.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Domain error:"));
    }
}
