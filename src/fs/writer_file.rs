use super::utils::{validate_path, FsError};
use super::LocalFile;
#[cfg(target_family = "unix")]
use std::os::unix::fs::OpenOptionsExt;
use std::io::Write;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;
use tracing::instrument;

#[cfg(target_family = "unix")]
const FILE_MODE: u32 = 0o644;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("error creating file: {0}")]
    ErrorCreatingFile(#[from] io::Error),

    #[error("invalid path: {0}")]
    InvalidPath(#[from] FsError),
}

pub trait FileWriter {
    fn write(&self, path: &Path, content: String) -> Result<(), WriteError>;
}

impl FileWriter for LocalFile {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn write(&self, path: &Path, content: String) -> Result<(), WriteError> {
        validate_path(path)?;

        let mut file_options = fs::OpenOptions::new();
        file_options.create(true).write(true).truncate(true);

        #[cfg(target_family = "unix")]
        {
            file_options.mode(FILE_MODE);
        }

        file_options.open(path)?.write_all(content.as_bytes())?;
        Ok(())
    }
}
