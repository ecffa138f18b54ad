//! Idempotent file application step.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::FileEntry, error::ProgenResult};

/// Outcome of one [`IdempotentFileWriter::apply`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub created: usize,
    pub skipped: usize,
}

/// Writes catalog files that do not exist yet and leaves the rest alone.
pub struct IdempotentFileWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> IdempotentFileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply every entry under `root`.
    ///
    /// Existing paths are skipped whatever their content. The first failed
    /// existence check or write aborts; files written before it stay on disk.
    #[instrument(skip_all, fields(root = %root.display(), count = files.len()))]
    pub fn apply(&self, root: &Path, files: &[FileEntry]) -> ProgenResult<ApplyReport> {
        let mut report = ApplyReport::default();

        for file in files {
            let path = file.path.under(root);

            if self.filesystem.path_exists(&path)? {
                debug!(path = %path.display(), "already exists, skipping");
                report.skipped += 1;
                continue;
            }

            self.filesystem.create_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "file created");
            report.created += 1;
        }

        Ok(report)
    }
}
