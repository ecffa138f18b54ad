pub mod common;
pub mod context;
pub mod plan;

pub use crate::domain::DomainError;
pub use context::{ProjectContext, ProjectContextResolver};
pub use plan::{FileEntry, ScaffoldPlan};
