use super::LocalFile;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("file not found or not a file: `{0}`")]
    SourceNotFound(String),

    #[error("source and destination are the same file: `{0}`")]
    SameFile(String),

    #[error("could not inspect `{path}`: {source}")]
    Inspecting {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error copying file: {0}")]
    Copying(#[from] io::Error),
}

impl CopyError {
    /// Whether the destination may have been created or truncated before the failure.
    pub fn touched_destination(&self) -> bool {
        matches!(self, Self::Copying(_))
    }
}

pub trait FileCopier {
    /// Copy the contents of `from` into `to`, overwriting `to` if present.
    ///
    /// Returns the number of bytes copied. `from` must be a regular file other than `to`.
    fn copy(&self, from: &Path, to: &Path) -> Result<u64, CopyError>;
}

impl FileCopier for LocalFile {
    fn copy(&self, from: &Path, to: &Path) -> Result<u64, CopyError> {
        if !from.is_file() {
            return Err(CopyError::SourceNotFound(from.display().to_string()));
        }

        if to.exists() {
            let same = same_file(from, to).map_err(|source| CopyError::Inspecting {
                path: to.display().to_string(),
                source,
            })?;
            if same {
                return Err(CopyError::SameFile(from.display().to_string()));
            }
        }

        Ok(fs::copy(from, to)?)
    }
}

#[cfg(target_family = "unix")]
fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let (a, b) = (fs::metadata(a)?, fs::metadata(b)?);
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(target_family = "unix"))]
fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::fs::mock::MockLocalFile;
    use mockall::predicate;
    use std::path::PathBuf;

    impl MockLocalFile {
        pub fn should_copy(&mut self, from: &Path, to: &Path) {
            self.expect_copy()
                .with(
                    predicate::eq(PathBuf::from(from)),
                    predicate::eq(PathBuf::from(to)),
                )
                .once()
                .returning(|_, _| Ok(1024));
        }

        pub fn should_not_copy(&mut self, from: &Path, to: &Path, kind: io::ErrorKind) {
            self.expect_copy()
                .with(
                    predicate::eq(PathBuf::from(from)),
                    predicate::eq(PathBuf::from(to)),
                )
                .once()
                .returning(move |_, _| Err(CopyError::Copying(io::Error::from(kind))));
        }
    }
}
