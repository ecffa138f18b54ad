//! The template catalog: which directories and files a run creates.
//!
//! One catalog covers every supported layout; [`CatalogOptions`] picks the
//! directory nesting and the flavour of entry point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        common::RelativePath,
        context::ProjectContext,
        plan::{FileEntry, ScaffoldPlan},
    },
    templates,
};

/// Directories shared by every layout.
const COMMON_DIRECTORIES: [&str; 4] = ["pkg", "internal", "configs", "scripts"];

/// Directory nesting of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `main.go` at the project root.
    #[default]
    Flat,
    /// `cmd/api/main.go`, the usual layout for an HTTP service.
    Service,
}

impl Layout {
    pub fn entry_point_path(self) -> &'static str {
        match self {
            Self::Flat => "main.go",
            Self::Service => "cmd/api/main.go",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Service => write!(f, "service"),
        }
    }
}

/// What the generated entry point does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryPoint {
    /// Parses `-config-path`, loads the YAML config and logs the service name.
    #[default]
    ModuleAware,
    /// Empty `main()`; no config reader is generated.
    Minimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub layout: Layout,
    pub entry_point: EntryPoint,
}

/// Maps a [`ProjectContext`] to the directories and files of a new project.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCatalog {
    options: CatalogOptions,
}

impl TemplateCatalog {
    pub fn new(options: CatalogOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CatalogOptions {
        self.options
    }

    /// Directories to ensure, in creation order.
    pub fn directories(&self) -> Vec<RelativePath> {
        let nested = match self.options.layout {
            Layout::Flat => None,
            Layout::Service => Some("cmd/api"),
        };

        nested
            .into_iter()
            .chain(COMMON_DIRECTORIES)
            .map(RelativePath::from)
            .collect()
    }

    /// Every file with its rendered content.
    pub fn files(&self, ctx: &ProjectContext) -> Vec<FileEntry> {
        let entry_point = self.options.layout.entry_point_path();

        let mut files = vec![
            FileEntry::new("README.md", templates::readme(ctx)),
            FileEntry::new("configs/config.yaml", templates::config_yaml(ctx)),
        ];

        match self.options.entry_point {
            EntryPoint::ModuleAware => {
                files.push(FileEntry::new("configs/config.go", templates::config_source()));
                files.push(FileEntry::new(entry_point, templates::main_with_config(ctx)));
            }
            EntryPoint::Minimal => {
                files.push(FileEntry::new(entry_point, templates::main_minimal()));
            }
        }

        files.extend([
            FileEntry::new("scripts/run.sh", templates::run_script()),
            FileEntry::new(".gitignore", templates::gitignore()),
            FileEntry::new(".env", templates::env_file()),
            FileEntry::new("Dockerfile", templates::dockerfile(entry_point)),
            FileEntry::new("docker-compose.yml", templates::docker_compose(ctx)),
            FileEntry::new(".dockerignore", templates::dockerignore()),
        ]);

        files
    }

    /// Directories and files together.
    pub fn plan(&self, ctx: &ProjectContext) -> ScaffoldPlan {
        ScaffoldPlan {
            directories: self.directories(),
            files: self.files(ctx),
        }
    }
}
