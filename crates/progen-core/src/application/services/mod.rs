//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` runs a whole generation; the provisioner and the file
//! writer are its two filesystem steps and can be used on their own.

pub mod file_writer;
pub mod provisioner;
pub mod scaffold_service;

pub use file_writer::{ApplyReport, IdempotentFileWriter};
pub use provisioner::DirectoryProvisioner;
pub use scaffold_service::{GenerationSummary, ScaffoldService};
