mod error;
mod staging;

use tracing::{info, instrument};

use crate::config::InstallConfig;
use crate::fs::file_copier::FileCopier;
use crate::fs::file_deleter::FileDeleter;
use crate::fs::file_permissions::FileExecutable;
use crate::module::UNINSTALL_SCRIPT;
use crate::package::{PackageName, READ_PHONE_STATE};
use crate::package_manager::PackageManager;

pub use error::InstallError;
pub use staging::StagedPackage;

/// Installs the module's package and grants it [READ_PHONE_STATE].
///
/// Every step runs once, in order, and the first fatal failure stops the
/// sequence. Nothing is retried or rolled back: the package manager owns the
/// installed state.
pub struct Installer<F, P> {
    fs: F,
    package_manager: P,
}

impl<F, P> Installer<F, P>
where
    F: FileExecutable + FileCopier + FileDeleter,
    P: PackageManager,
{
    pub fn new(fs: F, package_manager: P) -> Self {
        Self {
            fs,
            package_manager,
        }
    }

    #[instrument(skip_all, fields(package = %config.package_name))]
    pub fn install(&self, config: &InstallConfig) -> Result<(), InstallError> {
        let uninstall_script = config.module_dir.join(UNINSTALL_SCRIPT);
        info!("Making {} executable", uninstall_script.display());
        self.fs
            .make_executable(&uninstall_script)
            .map_err(|source| InstallError::UninstallScript {
                path: uninstall_script,
                source,
            })?;

        let source = config.package_path.resolve(&config.module_dir);
        let staging_path = config.tmp_dir.join(config.package_path.file_name());
        info!(
            "Staging {} into {}",
            source.display(),
            staging_path.display()
        );
        let staged = StagedPackage::stage(&self.fs, &source, staging_path.clone()).map_err(
            |err| InstallError::Staging {
                from: source,
                to: staging_path,
                source: err,
            },
        )?;

        info!("Installing {}", staged.path().display());
        let installed = self.package_manager.install_replacing(staged.path());
        // the staged copy goes away whatever the install outcome
        drop(staged);
        installed.map_err(InstallError::Install)?;

        info!("Granting {READ_PHONE_STATE}");
        self.package_manager
            .grant_permission(&config.package_name, READ_PHONE_STATE)
            .map_err(|source| InstallError::Grant {
                package: config.package_name.clone(),
                permission: READ_PHONE_STATE,
                source,
            })?;

        info!("Package installed");
        Ok(())
    }
}

impl<F, P: PackageManager> Installer<F, P> {
    #[instrument(skip_all, fields(package = %package))]
    pub fn uninstall(&self, package: &PackageName) -> Result<(), InstallError> {
        info!("Uninstalling");
        self.package_manager
            .uninstall(package)
            .map_err(|source| InstallError::Uninstall {
                package: package.clone(),
                source,
            })?;
        info!("Package uninstalled");
        Ok(())
    }
}
