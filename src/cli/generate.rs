use std::path::PathBuf;

use clap::Parser;

use crate::cli::{resolve_config, CliError};
use crate::config::{InstallerConfig, ModuleMetadata};
use crate::fs::LocalFile;
use crate::module::ModuleGenerator;
use crate::package::PackageName;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Directory the module files are written into [default: $MODPATH]
    #[arg(long)]
    pub module_dir: Option<PathBuf>,

    /// Identifier of the packaged application, e.g. `com.example.app`
    #[arg(long)]
    pub package_name: Option<PackageName>,

    /// Human readable version, written as `version`
    #[arg(long)]
    pub version_name: String,

    /// Monotonic version number, written as `versionCode`
    #[arg(long)]
    pub version_code: u64,

    /// Module name [default: last segment of the package name]
    #[arg(long)]
    pub name: Option<String>,

    /// Module author
    #[arg(long)]
    pub author: Option<String>,

    /// YAML file providing the module directory, package name and module metadata
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn generate(args: Args) -> Result<(), CliError> {
    let flags = InstallerConfig {
        module_dir: args.module_dir,
        package_name: args.package_name,
        module: ModuleMetadata {
            name: args.name,
            author: args.author,
            ..Default::default()
        },
        ..Default::default()
    };
    let config = resolve_config(flags, args.config.as_deref())?
        .generate_config(args.version_name, args.version_code)?;

    ModuleGenerator::new(LocalFile).generate(
        &config.module_dir,
        &config.package_name,
        &config.module_prop,
    )?;
    Ok(())
}
