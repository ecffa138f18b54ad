//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `progen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation, existence checks, exclusive file creation
//!   - `Toolchain`: Module initialisation and dependency resolution

pub mod output;

pub use output::{Filesystem, Toolchain};
