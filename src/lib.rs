//! Command-line controller for the Viscosity VPN client.
//!
//! Profiles and their states are read through Viscosity's AppleScript
//! interface ([`vpn::Viscosity`]); [`core::Registry`] correlates them and
//! drives connect/disconnect, and [`core::Spinner`] animates the terminal
//! while a transition completes.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logger;
pub mod state;
pub mod theme;
pub mod vpn;

pub use error::{Error, Result};
