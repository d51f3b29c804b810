use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fs::file_copier::CopyError;
use crate::package::PackageName;
use crate::package_manager::PackageManagerError;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("could not make the uninstall script `{}` executable: {source}", path.display())]
    UninstallScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not stage `{}` into `{}`: {source}", from.display(), to.display())]
    Staging {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: CopyError,
    },

    #[error("install failed: {0}")]
    Install(#[source] PackageManagerError),

    #[error("could not grant `{permission}` to `{package}`: {source}")]
    Grant {
        package: PackageName,
        permission: &'static str,
        #[source]
        source: PackageManagerError,
    },

    #[error("uninstall of `{package}` failed: {source}")]
    Uninstall {
        package: PackageName,
        #[source]
        source: PackageManagerError,
    },
}
