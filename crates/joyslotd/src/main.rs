mod cli;
mod host;
mod logging;
mod runtime;

use std::process::ExitCode;

use clap::Parser;
use crossbeam_channel::unbounded;

use crate::cli::{Cli, Command};
use crate::runtime::Overrides;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let result = match cli.command {
        Command::Run {
            config,
            nojoy,
            device,
            rumble_feedback,
        } => {
            // Handle Ctrl+C to exit cleanly
            let (stop_tx, stop_rx) = unbounded::<()>();
            if let Err(e) = ctrlc::set_handler(move || {
                let _ = stop_tx.send(());
            }) {
                print_error!("failed to set Ctrl+C handler: {e}");
                return ExitCode::FAILURE;
            }
            let overrides = Overrides { nojoy, device };
            runtime::run(&config, &overrides, rumble_feedback, &stop_rx)
        }
        Command::Devices { config } => runtime::list_devices(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
