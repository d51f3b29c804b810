use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use module_apk_installer::{
    cli::{Cli, CliError},
    logging::Logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = Logging::try_init(cli.log_level) {
        eprintln!("Failed to initialize logging: {err}");
        return CliError::from(err).into();
    }

    if let Err(err) = cli.run() {
        error!("{err}");
        return err.into();
    }

    ExitCode::SUCCESS
}
