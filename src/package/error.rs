use thiserror::Error;

use crate::fs::utils::FsError;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("invalid package name `{0}`: expected dot-separated segments like `com.example.app`")]
    InvalidName(String),

    #[error("invalid package path: {0}")]
    InvalidPath(#[from] FsError),

    #[error("package path `{0}` has no file name")]
    MissingFileName(String),
}
