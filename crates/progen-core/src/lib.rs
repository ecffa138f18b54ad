//! progen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the progen
//! Go service scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            progen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, DirectoryProvisioner,│
//! │        IdempotentFileWriter)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, Toolchain)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    progen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, GoToolchain, Memory…) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectContext, TemplateCatalog, Plan) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use progen_core::prelude::*;
//!
//! // 1. Resolve identity from the directory being scaffolded
//! let ctx = ProjectContextResolver::default().resolve(Some(&cwd));
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(TemplateCatalog::default(), filesystem, Some(toolchain));
//! service.generate(&cwd, &ctx)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplyReport, GenerationSummary, ScaffoldService,
        ports::{Filesystem, Toolchain},
    };
    pub use crate::domain::{
        CatalogOptions, EntryPoint, FileEntry, Layout, ProjectContext, ProjectContextResolver,
        RelativePath, ScaffoldPlan, TemplateCatalog,
    };
    pub use crate::error::{ProgenError, ProgenResult};
}

