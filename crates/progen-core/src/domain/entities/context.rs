//! Project identity derived from where the generator runs.
//!
//! The resolver never reads process state itself: callers hand it the
//! working directory (or `None` when it could not be determined).

use std::path::Path;

use serde::Serialize;
use tracing::warn;

/// Marker that identifies the code-hosting root inside a path.
pub const DEFAULT_MARKER: &str = "github.com";

/// Identity values used to parametrize every template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    project_name: String,
    module_path: String,
}

impl ProjectContext {
    pub fn new(project_name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: module_path.into(),
        }
    }

    /// Final segment of the working directory, or empty.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Import root such as `github.com/acme/widget`, or empty.
    pub fn module_path(&self) -> &str {
        &self.module_path
    }
}

/// Derives a [`ProjectContext`] from a working-directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContextResolver {
    marker: String,
}

impl ProjectContextResolver {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Resolve identity values. Never fails; missing pieces become empty
    /// strings and a warning is logged.
    pub fn resolve(&self, working_dir: Option<&Path>) -> ProjectContext {
        let Some(dir) = working_dir else {
            warn!("working directory unavailable; project name and module path left blank");
            return ProjectContext::default();
        };

        let project_name = project_name_of(dir);
        let module_path = module_path_of(dir, &self.marker).unwrap_or_else(|| {
            warn!(
                marker = %self.marker,
                path = %dir.display(),
                "String '{}' not found in path; module path left blank",
                self.marker
            );
            String::new()
        });

        ProjectContext {
            project_name,
            module_path,
        }
    }
}

impl Default for ProjectContextResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

/// Last component of `path`; empty for roots and `..`.
pub fn project_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Suffix of `path` starting at the first occurrence of `marker`.
///
/// This is a plain substring search on the path text, so separators stay in
/// their native form.
pub fn module_path_of(path: &Path, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    let text = path.to_string_lossy();
    text.find(marker).map(|index| text[index..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn project_name_is_last_segment() {
        assert_eq!(project_name_of(Path::new("/home/u/myservice")), "myservice");
    }

    #[test]
    fn project_name_of_root_is_empty() {
        assert_eq!(project_name_of(Path::new("/")), "");
    }

    #[cfg(unix)]
    #[test]
    fn module_path_starts_at_marker() {
        let path = Path::new("/home/u/go/src/github.com/acme/myservice");
        assert_eq!(
            module_path_of(path, DEFAULT_MARKER).as_deref(),
            Some("github.com/acme/myservice")
        );
    }

    #[test]
    fn module_path_absent_without_marker() {
        assert_eq!(module_path_of(Path::new("/srv/acme/myservice"), DEFAULT_MARKER), None);
    }

    #[cfg(unix)]
    #[test]
    fn module_path_uses_first_occurrence() {
        let path = Path::new("/x/github.com/a/github.com/b");
        assert_eq!(
            module_path_of(path, DEFAULT_MARKER).as_deref(),
            Some("github.com/a/github.com/b")
        );
    }

    #[test]
    fn empty_marker_never_matches() {
        assert_eq!(module_path_of(Path::new("/a/b"), ""), None);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_full_identity() {
        let resolver = ProjectContextResolver::default();
        let dir = PathBuf::from("/home/u/github.com/acme/widget");
        let ctx = resolver.resolve(Some(&dir));

        assert_eq!(ctx.project_name(), "widget");
        assert_eq!(ctx.module_path(), "github.com/acme/widget");
    }

    #[test]
    fn resolve_without_marker_keeps_name() {
        let resolver = ProjectContextResolver::default();
        let ctx = resolver.resolve(Some(Path::new("/srv/widget")));

        assert_eq!(ctx.project_name(), "widget");
        assert_eq!(ctx.module_path(), "");
    }

    #[test]
    fn resolve_without_working_dir_is_blank() {
        let ctx = ProjectContextResolver::default().resolve(None);
        assert_eq!(ctx, ProjectContext::default());
    }

    #[cfg(unix)]
    #[test]
    fn custom_marker() {
        let resolver = ProjectContextResolver::new("gitlab.com");
        let ctx = resolver.resolve(Some(Path::new("/w/gitlab.com/team/svc")));
        assert_eq!(ctx.module_path(), "gitlab.com/team/svc");
    }
}
