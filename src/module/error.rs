use std::path::PathBuf;

use thiserror::Error;

use crate::fs::writer_file::WriteError;

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("could not write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}
