mod error;
mod processrunner;

use std::process::ExitStatus;

pub use error::CommandError;
pub use processrunner::ProcessRunner;

/// Trait that specifies the interface for blocking command execution
pub trait CommandRunner {
    type Error: std::error::Error + Send + Sync;

    /// The run method executes the command and waits until it exits
    fn run(self) -> Result<ExitStatus, Self::Error>;
}
