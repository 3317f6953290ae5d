//! CLI command handlers.
//!
//! Each handler borrows the registry built in `main` and writes to the
//! given output, so they can run against a scripted controller in tests.

use std::cell::RefCell;
use std::io::Write;
use std::time::Instant;

use super::args::Commands;
use crate::config::Config;
use crate::constants;
use crate::core::{Registry, Spinner};
use crate::error::{Error, Result};
use crate::state::{ConnectionState, ProfileStatus};
use crate::theme;
use crate::vpn::Controller;

/// Dispatch a parsed subcommand.
///
/// # Errors
///
/// Returns whatever the handler returns.
pub fn run<C: Controller, W: Write>(
    command: &Commands,
    registry: &Registry<C>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::List { json } => list(registry, *json, out),
        Commands::Which => which(registry, out),
        Commands::Off => off(registry, config, out),
        Commands::On { profile } => on(registry, profile, config, out),
    }
}

/// Print every profile with its colorized state.
///
/// # Errors
///
/// Returns [`Error::Controller`] if the states cannot be read.
pub fn list<C: Controller, W: Write>(
    registry: &Registry<C>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let states = registry.states()?;

    if json {
        let rows: Vec<ProfileStatus> = registry
            .profiles()
            .iter()
            .zip(&states)
            .map(|(p, s)| ProfileStatus::new(p, s))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    if registry.profiles().is_empty() {
        writeln!(out, "{}", constants::CLI_MSG_NO_PROFILES)?;
        return Ok(());
    }

    for (profile, state) in registry.profiles().iter().zip(&states) {
        writeln!(
            out,
            "{:<width$}  {}",
            profile.name,
            theme::state(state),
            width = constants::LIST_NAME_WIDTH
        )?;
    }
    Ok(())
}

/// Print the connected profile, or nothing.
///
/// # Errors
///
/// Returns [`Error::Controller`] if the states cannot be read.
pub fn which<C: Controller, W: Write>(registry: &Registry<C>, out: &mut W) -> Result<()> {
    if let Some(profile) = registry.which()? {
        writeln!(out, "{profile}")?;
    }
    Ok(())
}

/// Disconnect everything and animate until nothing reports `Connected`.
///
/// The spinner runs for at least the configured grace period even when the
/// application already reports every profile as disconnected.
///
/// # Errors
///
/// Returns [`Error::Controller`] on a failed call and [`Error::Timeout`]
/// if a connection is still up after the transition timeout.
pub fn off<C: Controller, W: Write>(
    registry: &Registry<C>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let started = Instant::now();
    let grace = config.disconnect_grace();
    let timeout = config.transition_timeout();

    registry.disconnect_all()?;
    Spinner::disconnecting()
        .with_interval(config.frame_interval())
        .run(
            out,
            || constants::CLI_MSG_DISCONNECTING.to_string(),
            || {
                let elapsed = started.elapsed();
                if elapsed < grace {
                    return Ok(true);
                }
                if !registry.any_connected()? {
                    return Ok(false);
                }
                if elapsed >= timeout {
                    return Err(Error::Timeout {
                        what: "VPN to disconnect".to_string(),
                        after: timeout,
                    });
                }
                Ok(true)
            },
        )?;

    log::info!("all connections closed");
    writeln!(
        out,
        "{}  {}",
        theme::red(constants::GLYPH_DISCONNECT),
        constants::CLI_MSG_DISCONNECTED
    )?;
    Ok(())
}

/// Connect `profile` and animate with its live state until it is up.
///
/// # Errors
///
/// Returns [`Error::InvalidProfile`] without touching the application if
/// the profile is unknown, [`Error::Controller`] on a failed call, and
/// [`Error::Timeout`] if the profile is not connected in time.
pub fn on<C: Controller, W: Write>(
    registry: &Registry<C>,
    profile: &str,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    registry.connect(profile)?;

    let started = Instant::now();
    let timeout = config.transition_timeout();
    let current = RefCell::new(ConnectionState::default());

    Spinner::connecting()
        .with_interval(config.frame_interval())
        .run(
            out,
            || current.borrow().to_string(),
            || {
                let state = registry.state(profile)?;
                let pending = !state.is_connected();
                *current.borrow_mut() = state;
                if pending && started.elapsed() >= timeout {
                    return Err(Error::Timeout {
                        what: format!("{profile} to connect"),
                        after: timeout,
                    });
                }
                Ok(pending)
            },
        )?;

    log::info!("connected to {profile}");
    writeln!(
        out,
        "{}  {}{profile}",
        theme::green(constants::GLYPH_CONNECT),
        constants::CLI_MSG_CONNECTED
    )?;
    Ok(())
}
