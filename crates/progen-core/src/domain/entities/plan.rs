use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Everything one run wants on disk: directories first, then files.
///
/// This is the output of the catalog. It contains no business logic,
/// only data, and is applied by the provisioning services.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    pub(crate) directories: Vec<RelativePath>,
    pub(crate) files: Vec<FileEntry>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject empty plans and paths listed twice.
    ///
    /// Directory and file paths share one namespace: a file and a directory
    /// at the same location can never both be satisfied.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path));
        for path in paths {
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path.as_path() == std::path::Path::new(path))
    }
}

/// A file the plan wants to exist, with its rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: RelativePath,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
