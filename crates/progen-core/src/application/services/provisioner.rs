//! Directory provisioning step.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::RelativePath, error::ProgenResult};

/// Ensures every catalog directory exists under a root.
pub struct DirectoryProvisioner<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryProvisioner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create each directory chain in order.
    ///
    /// Stops at the first failure. Directories created before it stay.
    #[instrument(skip_all, fields(root = %root.display(), count = dirs.len()))]
    pub fn ensure(&self, root: &Path, dirs: &[RelativePath]) -> ProgenResult<usize> {
        for dir in dirs {
            let path = dir.under(root);
            self.filesystem.create_dir_all(&path)?;
            debug!(path = %path.display(), "directory ensured");
        }
        Ok(dirs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockFilesystem};
    use mockall::Sequence;
    use std::path::PathBuf;

    fn dirs(paths: &[&str]) -> Vec<RelativePath> {
        paths.iter().copied().map(RelativePath::from).collect()
    }

    #[test]
    fn creates_in_order_under_root() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();
        for dir in ["pkg", "internal", "configs"] {
            let expected = PathBuf::from("/w").join(dir);
            fs.expect_create_dir_all()
                .withf(move |p| p == expected.as_path())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let count = DirectoryProvisioner::new(&fs)
            .ensure(Path::new("/w"), &dirs(&["pkg", "internal", "configs"]))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn stops_at_first_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/w/pkg"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/w/internal"))
            .times(1)
            .returning(|p| {
                Err(ApplicationError::ProvisioningFailed {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        // "configs" must never be attempted.

        let result = DirectoryProvisioner::new(&fs)
            .ensure(Path::new("/w"), &dirs(&["pkg", "internal", "configs"]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let fs = MockFilesystem::new();
        let count = DirectoryProvisioner::new(&fs).ensure(Path::new("."), &[]).unwrap();
        assert_eq!(count, 0);
    }
}
