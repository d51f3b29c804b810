use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::fs::file_copier::{CopyError, FileCopier};
use crate::fs::file_deleter::FileDeleter;

/// Copy of the package in the temp dir, removed when dropped.
///
/// Removal is best-effort: a failure is logged and never reported to the caller.
pub struct StagedPackage<'a, F: FileDeleter> {
    path: PathBuf,
    fs: &'a F,
}

impl<'a, F> StagedPackage<'a, F>
where
    F: FileCopier + FileDeleter,
{
    /// Copies `source` to `path`. On failure nothing is left at `path` that this call created,
    /// and a file that was already there is only removed when the copy started overwriting it.
    pub fn stage(fs: &'a F, source: &Path, path: PathBuf) -> Result<Self, CopyError> {
        match fs.copy(source, &path) {
            Ok(bytes) => {
                debug!(path = %path.display(), "staged {bytes} bytes");
                Ok(Self { path, fs })
            }
            Err(err) => {
                if err.touched_destination() {
                    discard_partial_copy(fs, &path);
                }
                Err(err)
            }
        }
    }
}

impl<F: FileDeleter> StagedPackage<'_, F> {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: FileDeleter> Drop for StagedPackage<'_, F> {
    fn drop(&mut self) {
        match self.fs.delete(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "staged package removed"),
            Err(err) => warn!(
                path = %self.path.display(),
                "could not remove staged package: {err}"
            ),
        }
    }
}

fn discard_partial_copy<F: FileDeleter>(fs: &F, path: &Path) {
    match fs.delete(path) {
        Ok(()) => debug!(path = %path.display(), "partial copy removed"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), "could not remove partial copy: {err}"),
    }
}
