//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates a whole generation run:
//! 1. Build the scaffold plan from the catalog
//! 2. Ensure directories
//! 3. Write missing files
//! 4. Initialise and tidy the module through the toolchain port
//!
//! Nothing is rolled back: a failure leaves whatever was created so far, and
//! re-running after fixing the cause completes the remaining work.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Toolchain},
        services::{ApplyReport, DirectoryProvisioner, IdempotentFileWriter},
    },
    domain::{DomainValidator as validator, ProjectContext, TemplateCatalog},
    error::{ProgenError, ProgenResult},
};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub project_name: String,
    pub module_path: String,
    pub directories: usize,
    pub files: ApplyReport,
    pub module_initialised: bool,
    pub tidied: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: TemplateCatalog,
    filesystem: Box<dyn Filesystem>,
    toolchain: Option<Box<dyn Toolchain>>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Pass `None` for `toolchain` to only lay down directories and files.
    pub fn new(
        catalog: TemplateCatalog,
        filesystem: Box<dyn Filesystem>,
        toolchain: Option<Box<dyn Toolchain>>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            toolchain,
        }
    }

    /// Scaffold the project rooted at `root`.
    #[instrument(
        skip_all,
        fields(
            root = %root.display(),
            project = %ctx.project_name(),
            module = %ctx.module_path()
        )
    )]
    pub fn generate(&self, root: &Path, ctx: &ProjectContext) -> ProgenResult<GenerationSummary> {
        info!(
            layout = %self.catalog.options().layout,
            "Scaffolding project '{}'",
            ctx.project_name()
        );

        // 1. Plan
        let plan = self.catalog.plan(ctx);
        validator::validate_plan(&plan).map_err(ProgenError::Domain)?;

        // 2. Directories
        let directories = DirectoryProvisioner::new(self.filesystem.as_ref())
            .ensure(root, plan.directories())?;

        // 3. Files
        let files = IdempotentFileWriter::new(self.filesystem.as_ref()).apply(root, plan.files())?;
        info!(
            created = files.created,
            skipped = files.skipped,
            "Files applied"
        );

        // 4. Toolchain
        let mut module_initialised = false;
        let mut tidied = false;
        if let Some(toolchain) = &self.toolchain {
            module_initialised = self.init_module(toolchain.as_ref(), root, ctx)?;
            toolchain.tidy(root)?;
            tidied = true;
        }

        info!("Scaffold completed successfully");
        Ok(GenerationSummary {
            project_name: ctx.project_name().to_string(),
            module_path: ctx.module_path().to_string(),
            directories,
            files,
            module_initialised,
            tidied,
        })
    }

    /// Run `init` unless the dependency manifest is already there.
    fn init_module(
        &self,
        toolchain: &dyn Toolchain,
        root: &Path,
        ctx: &ProjectContext,
    ) -> ProgenResult<bool> {
        let manifest = root.join(toolchain.manifest_name());
        if self.filesystem.path_exists(&manifest)? {
            info!(manifest = %manifest.display(), "Module already initialised");
            return Ok(false);
        }

        toolchain.init_module(root, ctx.module_path())?;
        info!(module = %ctx.module_path(), "Module initialised");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::{MockFilesystem, MockToolchain},
    };
    use crate::domain::{CatalogOptions, EntryPoint};
    use mockall::Sequence;

    fn widget() -> ProjectContext {
        ProjectContext::new("widget", "github.com/acme/widget")
    }

    /// Filesystem where nothing exists and everything succeeds.
    fn empty_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_path_exists().returning(|_| Ok(false));
        fs.expect_create_file().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn generates_without_toolchain() {
        let service = ScaffoldService::new(TemplateCatalog::default(), Box::new(empty_fs()), None);

        let summary = service.generate(Path::new("/w"), &widget()).unwrap();
        assert_eq!(summary.directories, 4);
        assert_eq!(summary.files.created, 10);
        assert_eq!(summary.files.skipped, 0);
        assert!(!summary.module_initialised);
        assert!(!summary.tidied);
    }

    #[test]
    fn minimal_catalog_writes_fewer_files() {
        let catalog = TemplateCatalog::new(CatalogOptions {
            entry_point: EntryPoint::Minimal,
            ..Default::default()
        });
        let service = ScaffoldService::new(catalog, Box::new(empty_fs()), None);

        let summary = service.generate(Path::new("."), &widget()).unwrap();
        assert_eq!(summary.files.created, 9);
    }

    #[test]
    fn toolchain_inits_then_tidies_when_manifest_missing() {
        let mut toolchain = MockToolchain::new();
        let mut seq = Sequence::new();
        toolchain.expect_manifest_name().return_const("go.mod".to_string());
        toolchain
            .expect_init_module()
            .withf(|root, module| root == Path::new("/w") && module == "github.com/acme/widget")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        toolchain
            .expect_tidy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(
            TemplateCatalog::default(),
            Box::new(empty_fs()),
            Some(Box::new(toolchain)),
        );

        let summary = service.generate(Path::new("/w"), &widget()).unwrap();
        assert!(summary.module_initialised);
        assert!(summary.tidied);
    }

    #[test]
    fn existing_manifest_skips_init_but_still_tidies() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_path_exists()
            .returning(|p| Ok(p == Path::new("/w/go.mod")));
        fs.expect_create_file().returning(|_, _| Ok(()));

        let mut toolchain = MockToolchain::new();
        toolchain.expect_manifest_name().return_const("go.mod".to_string());
        toolchain.expect_init_module().never();
        toolchain.expect_tidy().times(1).returning(|_| Ok(()));

        let service =
            ScaffoldService::new(TemplateCatalog::default(), Box::new(fs), Some(Box::new(toolchain)));

        let summary = service.generate(Path::new("/w"), &widget()).unwrap();
        assert!(!summary.module_initialised);
        assert!(summary.tidied);
    }

    #[test]
    fn toolchain_failure_is_surfaced() {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_manifest_name().return_const("go.mod".to_string());
        toolchain.expect_init_module().returning(|_, _| {
            Err(ApplicationError::ToolchainFailed {
                command: "go mod init".into(),
                reason: "exit status 1".into(),
            }
            .into())
        });
        toolchain.expect_tidy().never();

        let service = ScaffoldService::new(
            TemplateCatalog::default(),
            Box::new(empty_fs()),
            Some(Box::new(toolchain)),
        );

        let err = service.generate(Path::new("/w"), &widget()).unwrap_err();
        assert!(matches!(
            err,
            ProgenError::Application(ApplicationError::ToolchainFailed { .. })
        ));
    }

    #[test]
    fn provisioning_failure_aborts_before_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::ProvisioningFailed {
                path: p.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into())
        });
        fs.expect_path_exists().never();
        fs.expect_create_file().never();

        let service = ScaffoldService::new(TemplateCatalog::default(), Box::new(fs), None);
        assert!(service.generate(Path::new("/w"), &widget()).is_err());
    }
}
