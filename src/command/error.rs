use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command not found: `{0}`")]
    CommandNotFound(String),

    #[error("`{0}` not piped")]
    StreamPipeError(String),

    #[error("io error: `{0}`")]
    IOError(#[from] std::io::Error),
}

impl CommandError {
    /// Builds the error for a failed spawn of `binary`, telling apart a missing binary.
    pub(super) fn from_spawn(binary: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CommandError::CommandNotFound(binary.to_string()),
            _ => CommandError::IOError(err),
        }
    }
}
