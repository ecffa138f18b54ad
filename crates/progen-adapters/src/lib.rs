//! Infrastructure adapters for progen.
//!
//! This crate implements the ports defined in `progen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use toolchain::GoToolchain;
