pub mod error;
pub mod generate;
pub mod install;
pub mod uninstall;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::config::InstallerConfig;

pub use error::CliError;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level, overridden by `RUST_LOG` when set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,
}

/// Commands supported by the cli
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the module's package and grant it READ_PHONE_STATE
    Install(install::Args),
    /// Uninstall the module's package
    Uninstall(uninstall::Args),
    /// Write the module's uninstall script and module.prop
    Generate(generate::Args),
}

impl Cli {
    pub fn run(self) -> Result<(), CliError> {
        match self.command {
            Commands::Install(args) => install::install(args),
            Commands::Uninstall(args) => uninstall::uninstall(args),
            Commands::Generate(args) => generate::generate(args),
        }
    }
}

/// Merges the flag layer with the config file (if any) and the environment.
fn resolve_config(
    flags: InstallerConfig,
    config_path: Option<&Path>,
) -> Result<InstallerConfig, CliError> {
    let file = match config_path {
        Some(path) => InstallerConfig::load(path)?,
        None => InstallerConfig::default(),
    };
    Ok(flags.or(file).or(InstallerConfig::from_env()))
}
