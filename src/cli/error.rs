use std::process::ExitCode;

use thiserror::Error;

use crate::config::ConfigError;
use crate::installer::InstallError;
use crate::logging::LoggingError;
use crate::module::ModuleError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to initialize logs: {0}")]
    Logging(#[from] LoggingError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Install(#[from] InstallError),

    #[error("{0}")]
    Module(#[from] ModuleError),
}

impl From<CliError> for ExitCode {
    /// Converts the error to an exit code.
    ///
    /// We comply with the [BSD exit codes] for the errors raised before any
    /// step of the procedure runs.
    ///
    /// [BSD exit codes]: https://man.freebsd.org/cgi/man.cgi?query=sysexits&manpath=FreeBSD+4.3-RELEASE
    fn from(value: CliError) -> Self {
        match value {
            CliError::Config(_) => Self::from(78),
            CliError::Logging(_) => Self::from(70),
            CliError::Install(_) | CliError::Module(_) => Self::from(1),
        }
    }
}
