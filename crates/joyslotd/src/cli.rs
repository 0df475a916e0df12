use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use joyslot_settings::DEFAULT_SETTINGS_FILE;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Run the joystick subsystem in the foreground.
    Run {
        /// Settings file; watched for changes while running
        #[clap(short, long, default_value = DEFAULT_SETTINGS_FILE)]
        config: PathBuf,
        /// Skip joystick initialization entirely
        #[clap(long)]
        nojoy: bool,
        /// Only ever activate this device id (-1 for first available)
        #[clap(short, long, allow_negative_numbers = true)]
        device: Option<i64>,
        /// Rumble the active device with the trigger position
        #[clap(long)]
        rumble_feedback: bool,
    },
    /// List attached joysticks and whether they are recognized.
    Devices {
        /// Settings file providing the controller mapping
        #[clap(short, long, default_value = DEFAULT_SETTINGS_FILE)]
        config: PathBuf,
    },
}

/// Single-device gamepad input with hotplug and rumble.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_to_settings_file_in_cwd() {
        let cli = Cli::try_parse_from(["joyslotd", "run"]).expect("valid args");
        assert_eq!(
            cli.command,
            Command::Run {
                config: PathBuf::from(DEFAULT_SETTINGS_FILE),
                nojoy: false,
                device: None,
                rumble_feedback: false,
            }
        );
    }

    #[test]
    fn run_accepts_negative_device() {
        let cli = Cli::try_parse_from(["joyslotd", "-v", "run", "--device", "-1", "--nojoy"])
            .expect("valid args");
        assert!(cli.verbose);
        match cli.command {
            Command::Run { device, nojoy, .. } => {
                assert_eq!(device, Some(-1));
                assert!(nojoy);
            }
            Command::Devices { .. } => panic!("expected run"),
        }
    }
}
