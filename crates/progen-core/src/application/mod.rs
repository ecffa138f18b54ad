//! Application layer for progen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService and its two steps)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template logic itself. Templates live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ApplyReport, DirectoryProvisioner, GenerationSummary, IdempotentFileWriter, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Toolchain};

pub use error::ApplicationError;
