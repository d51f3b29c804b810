use std::path::PathBuf;

use clap::Parser;

use crate::cli::{resolve_config, CliError};
use crate::config::InstallerConfig;
use crate::fs::LocalFile;
use crate::installer::Installer;
use crate::package::{PackageName, PackagePath};
use crate::package_manager::PmCli;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Package file to install, relative to the module directory unless absolute
    #[arg(long)]
    pub package_path: Option<PackagePath>,

    /// Identifier of the installed package, e.g. `com.example.app`
    #[arg(long)]
    pub package_name: Option<PackageName>,

    /// Directory holding the module files [default: $MODPATH]
    #[arg(long)]
    pub module_dir: Option<PathBuf>,

    /// Directory the package is staged into [default: $TMPDIR]
    #[arg(long)]
    pub tmp_dir: Option<PathBuf>,

    /// Package manager binary [default: pm]
    #[arg(long)]
    pub pm_path: Option<PathBuf>,

    /// YAML file providing any of the values above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub(crate) fn layer(&self) -> InstallerConfig {
        InstallerConfig {
            module_dir: self.module_dir.clone(),
            package_path: self.package_path.clone(),
            package_name: self.package_name.clone(),
            tmp_dir: self.tmp_dir.clone(),
            pm_path: self.pm_path.clone(),
            ..Default::default()
        }
    }
}

pub fn install(args: Args) -> Result<(), CliError> {
    let config = resolve_config(args.layer(), args.config.as_deref())?.install_config()?;
    let installer = Installer::new(LocalFile, PmCli::new(&config.pm_path));
    Ok(installer.install(&config)?)
}
