use std::process::ExitStatus;

use thiserror::Error;

use crate::command::CommandError;

#[derive(Error, Debug)]
pub enum PackageManagerError {
    #[error("could not run the package manager: {0}")]
    Command(#[from] CommandError),

    #[error("package manager `{operation}` exited with {status}")]
    Failed {
        operation: &'static str,
        status: ExitStatus,
    },
}
