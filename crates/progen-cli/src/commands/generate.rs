//! The default (and only) action: scaffold the target directory.
//!
//! Responsibility: resolve the target directory, derive the project identity
//! from it, wire the adapters into a `ScaffoldService`, and display results.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use progen_adapters::{GoToolchain, LocalFilesystem};
use progen_core::{
    application::{GenerationSummary, ScaffoldService, Toolchain},
    domain::{ProjectContextResolver, TemplateCatalog},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
#[instrument(skip_all, fields(directory = ?args.directory))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.directory.as_deref())?;
    let config = config.with_overrides(&args);

    if config.identity.marker.is_empty() {
        return Err(CliError::InvalidInput {
            message: "the module path marker must not be empty".into(),
            source: None,
        });
    }

    let resolver = ProjectContextResolver::new(config.identity.marker.as_str());
    let ctx = resolver.resolve(working_dir(&root).as_deref());
    debug!(
        project = %ctx.project_name(),
        module = %ctx.module_path(),
        layout = %config.catalog.layout,
        toolchain = config.toolchain.enabled,
        "Context resolved"
    );

    let toolchain: Option<Box<dyn Toolchain>> = config
        .toolchain
        .enabled
        .then(|| {
            Box::new(GoToolchain::new(config.toolchain.program.as_str())) as Box<dyn Toolchain>
        });

    let service = ScaffoldService::new(
        TemplateCatalog::new(config.catalog),
        Box::new(LocalFilesystem::new()),
        toolchain,
    );

    let summary = service.generate(&root, &ctx)?;
    report(&summary, &output)
}

/// The directory to scaffold. It must already exist.
fn resolve_root(directory: Option<&Path>) -> CliResult<PathBuf> {
    let Some(dir) = directory else {
        return Ok(PathBuf::from("."));
    };

    if !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not an existing directory", dir.display()),
            source: None,
        });
    }
    Ok(dir.to_path_buf())
}

/// Absolute form of `root` used for identity resolution; `None` when it
/// cannot be determined.
///
/// Relative roots are joined onto the logical working directory, so a
/// checkout reached through a symlink keeps the path the user typed.
fn working_dir(root: &Path) -> Option<PathBuf> {
    if root.components().any(|c| c == Component::ParentDir) {
        return root.canonicalize().ok();
    }
    let base = if root.is_absolute() {
        PathBuf::new()
    } else {
        logical_current_dir()?
    };
    Some(
        base.join(root)
            .components()
            .filter(|c| *c != Component::CurDir)
            .collect(),
    )
}

fn logical_current_dir() -> Option<PathBuf> {
    let physical = std::env::current_dir().ok()?;
    Some(prefer_logical(
        std::env::var_os("PWD").map(PathBuf::from),
        physical,
    ))
}

/// `$PWD` wins when it names the same directory as the physical path.
fn prefer_logical(pwd: Option<PathBuf>, physical: PathBuf) -> PathBuf {
    match pwd {
        Some(pwd) if pwd.is_absolute() && same_dir(&pwd, &physical) => pwd,
        _ => physical,
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn report(summary: &GenerationSummary, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(summary)?;
        return Ok(());
    }

    output.success(&format!(
        "Scaffolded '{}': {} file(s) created, {} already present",
        summary.project_name, summary.files.created, summary.files.skipped
    ))?;

    if summary.module_initialised {
        output.info(&format!("Initialised module {}", summary.module_path))?;
    }
    if summary.tidied {
        output.info("Dependencies tidied")?;
    } else {
        output.print("Toolchain skipped; run `go mod init` and `go mod tidy` when ready")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_root(Some(&tmp.path().join("absent"))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("README.md");
        std::fs::write(&file, "x").unwrap();
        assert!(resolve_root(Some(&file)).is_err());
    }

    #[test]
    fn default_root_is_current_directory() {
        assert_eq!(resolve_root(None).unwrap(), PathBuf::from("."));
        assert_eq!(working_dir(Path::new(".")), logical_current_dir());
    }

    #[test]
    fn relative_root_drops_current_dir_components() {
        let cwd = logical_current_dir().unwrap();
        assert_eq!(working_dir(Path::new("./widget")), Some(cwd.join("widget")));
    }

    #[test]
    fn stale_pwd_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let physical = tmp.path().to_path_buf();
        let elsewhere = tempfile::tempdir().unwrap();

        assert_eq!(
            prefer_logical(Some(elsewhere.path().to_path_buf()), physical.clone()),
            physical
        );
        assert_eq!(prefer_logical(Some("relative".into()), physical.clone()), physical);
        assert_eq!(prefer_logical(None, physical.clone()), physical);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_pwd_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let physical = tmp.path().join("src");
        std::fs::create_dir(&physical).unwrap();
        let link = tmp.path().join("github.com");
        std::os::unix::fs::symlink(&physical, &link).unwrap();

        assert_eq!(prefer_logical(Some(link.clone()), physical), link);
    }

    #[test]
    fn working_dir_is_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = working_dir(tmp.path()).unwrap();
        assert!(dir.is_absolute());
        assert_eq!(dir.file_name(), tmp.path().file_name());
    }
}
