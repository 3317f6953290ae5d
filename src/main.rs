use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::{Report, Result};

use vpnctl::cli::args::Args;
use vpnctl::cli::commands;
use vpnctl::config::Config;
use vpnctl::constants;
use vpnctl::core::Registry;
use vpnctl::logger;
use vpnctl::vpn::Viscosity;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    logger::init(args.verbose);
    log::debug!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    let config = Config::load(args.config.as_deref()).map_err(fatal)?;
    let controller = Viscosity::new(config.application.clone());
    let registry = Registry::new(controller, config.poll_policy()).map_err(fatal)?;

    match commands::run(&args.command, &registry, &config, &mut io::stdout()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_user_error() => {
            eprintln!("{err}");
            eprintln!("{}", constants::CLI_MSG_LIST_HINT);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(fatal(err)),
    }
}

/// Hand an unrecoverable error to color-eyre for the report.
fn fatal(err: vpnctl::Error) -> Report {
    log::debug!("fatal: {err:?}");
    Report::new(err)
}
