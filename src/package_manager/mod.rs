mod error;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::command::{CommandRunner, ProcessRunner};
use crate::package::PackageName;

pub use error::PackageManagerError;

/// Package manager binary shipped with the platform.
pub const DEFAULT_PM_PATH: &str = "pm";

/// Requests the platform package manager can serve.
pub trait PackageManager {
    /// Install the package file at `package_file`, replacing any installed version.
    fn install_replacing(&self, package_file: &Path) -> Result<(), PackageManagerError>;

    fn grant_permission(
        &self,
        package: &PackageName,
        permission: &str,
    ) -> Result<(), PackageManagerError>;

    fn uninstall(&self, package: &PackageName) -> Result<(), PackageManagerError>;
}

/// [PackageManager] backed by the `pm` command line tool.
pub struct PmCli {
    pm_path: PathBuf,
}

impl PmCli {
    pub fn new(pm_path: impl Into<PathBuf>) -> Self {
        Self {
            pm_path: pm_path.into(),
        }
    }

    fn run<I, S>(&self, operation: &'static str, args: I) -> Result<(), PackageManagerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let status = ProcessRunner::new(&self.pm_path, args).run()?;
        if !status.success() {
            return Err(PackageManagerError::Failed { operation, status });
        }
        debug!("{} {operation} succeeded", self.pm_path.display());
        Ok(())
    }
}

impl PackageManager for PmCli {
    fn install_replacing(&self, package_file: &Path) -> Result<(), PackageManagerError> {
        self.run(
            "install",
            [OsStr::new("install"), OsStr::new("-r"), package_file.as_os_str()],
        )
    }

    fn grant_permission(
        &self,
        package: &PackageName,
        permission: &str,
    ) -> Result<(), PackageManagerError> {
        self.run("grant", ["grant", package.as_str(), permission])
    }

    fn uninstall(&self, package: &PackageName) -> Result<(), PackageManagerError> {
        self.run("uninstall", ["uninstall", package.as_str()])
    }
}
