use std::path::PathBuf;

use clap::Parser;

use crate::cli::{resolve_config, CliError};
use crate::config::InstallerConfig;
use crate::fs::LocalFile;
use crate::installer::Installer;
use crate::package::PackageName;
use crate::package_manager::PmCli;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Identifier of the installed package, e.g. `com.example.app`
    #[arg(long)]
    pub package_name: Option<PackageName>,

    /// Package manager binary [default: pm]
    #[arg(long)]
    pub pm_path: Option<PathBuf>,

    /// YAML file providing any of the values above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn uninstall(args: Args) -> Result<(), CliError> {
    let flags = InstallerConfig {
        package_name: args.package_name,
        pm_path: args.pm_path,
        ..Default::default()
    };
    let config = resolve_config(flags, args.config.as_deref())?.uninstall_config()?;
    let installer = Installer::new(LocalFile, PmCli::new(config.pm_path));
    Ok(installer.uninstall(&config.package_name)?)
}
