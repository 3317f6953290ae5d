//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// vpn - A CLI wrapper for the Viscosity application on macOS, based on its
/// AppleScript API
#[derive(Parser, Debug)]
#[command(name = "vpn", author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the available VPN profiles and their connection states
    #[command(visible_alias = "ls")]
    List {
        /// Print the profiles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the currently connected VPN profile
    Which,
    /// Disconnect the VPN connection
    #[command(visible_alias = "disconnect")]
    Off,
    /// Connect the VPN using the given profile
    #[command(visible_alias = "connect")]
    On {
        /// Name of the profile, as shown by `vpn list`
        profile: String,
    },
}
