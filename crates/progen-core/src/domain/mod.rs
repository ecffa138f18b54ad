// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for progen.
//!
//! This module contains pure logic with no I/O: identity derivation, the
//! template catalog and the scaffold plan it produces. Filesystem and
//! toolchain access happen behind the ports in `crate::application`.
//!
//! ## Rules
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Template functions only build strings
//! - **Fresh per run**: Nothing here is cached between invocations
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod templates;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use catalog::{CatalogOptions, EntryPoint, Layout, TemplateCatalog};
pub use entities::{
    common::RelativePath,
    context::{DEFAULT_MARKER, ProjectContext, ProjectContextResolver},
    plan::{FileEntry, ScaffoldPlan},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
