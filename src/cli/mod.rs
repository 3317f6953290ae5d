//! Command-line interface module.
//!
//! clap argument definitions and the handlers for each subcommand.

pub mod args;
pub mod commands;
