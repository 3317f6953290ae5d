//! Profile registry and live state reader.
//!
//! The VPN application only exposes two separate list queries, one for the
//! connection names and one for their states. The registry snapshots the
//! names once and correlates every fresh state list against that snapshot
//! by position. If the application ever answered the two queries in a
//! different order, lookups would silently return the wrong state; the only
//! guard we can offer is the length check in [`Registry::states`].

use super::poll::{self, PollPolicy};
use crate::error::{Error, Result};
use crate::state::{ConnectionState, Profile};
use crate::vpn::{self, Controller};

/// Authoritative view of the configured profiles and their states.
#[derive(Debug)]
pub struct Registry<C> {
    controller: C,
    profiles: Vec<Profile>,
    poll: PollPolicy,
}

impl<C: Controller> Registry<C> {
    /// Snapshot the profile list from the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Controller`] if the names query fails. The tool
    /// cannot do anything useful without it.
    pub fn new(controller: C, poll: PollPolicy) -> Result<Self> {
        let raw = controller.profile_names()?;
        let profiles: Vec<Profile> = vpn::parse_list(&raw)
            .into_iter()
            .map(Profile::new)
            .collect();
        log::debug!("registry: {} profile(s) found", profiles.len());

        Ok(Self {
            controller,
            profiles,
            poll,
        })
    }

    /// Profiles in the order the application reported them.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Whether `name` is one of the snapshot profiles.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.iter().any(|p| p.name == name)
    }

    /// Fresh states, positionally aligned with [`Registry::profiles`].
    ///
    /// Not cached: every call queries the application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Controller`] if the query fails or the number of
    /// states differs from the number of profiles.
    pub fn states(&self) -> Result<Vec<ConnectionState>> {
        let raw = self.controller.profile_states()?;
        let tokens = vpn::parse_list(&raw);
        if tokens.len() != self.profiles.len() {
            return Err(Error::controller(
                "states",
                format!(
                    "got {} state(s) for {} profile(s), the profile list changed or a name contains a space",
                    tokens.len(),
                    self.profiles.len()
                ),
            ));
        }

        Ok(tokens
            .iter()
            .map(|t| t.parse::<ConnectionState>().unwrap_or_default())
            .collect())
    }

    /// Current state of one profile, or [`ConnectionState::NotFound`].
    ///
    /// # Errors
    ///
    /// See [`Registry::states`].
    pub fn state(&self, name: &str) -> Result<ConnectionState> {
        let states = self.states()?;
        Ok(self
            .profiles
            .iter()
            .zip(states)
            .find(|(p, _)| p.name == name)
            .map_or(ConnectionState::NotFound, |(_, s)| s))
    }

    /// The first connected profile in registry order, if any.
    ///
    /// The application allows a single active connection, so in practice
    /// there is at most one.
    ///
    /// # Errors
    ///
    /// See [`Registry::states`].
    pub fn which(&self) -> Result<Option<&Profile>> {
        let states = self.states()?;
        Ok(self
            .profiles
            .iter()
            .zip(states)
            .find(|(_, s)| s.is_connected())
            .map(|(p, _)| p))
    }

    /// Whether any profile currently reports `Connected`.
    ///
    /// # Errors
    ///
    /// See [`Registry::states`].
    pub fn any_connected(&self) -> Result<bool> {
        Ok(self.states()?.iter().any(ConnectionState::is_connected))
    }

    /// Fire a single "disconnect all" at the application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Controller`] if the command fails.
    pub fn disconnect_all(&self) -> Result<()> {
        log::info!("disconnecting all connections");
        self.controller.disconnect_all()
    }

    /// Connect `name`, tearing down any existing connection first.
    ///
    /// The application cannot start a connection while another one is still
    /// going down, so this disconnects everything, polls until no profile
    /// reports `Connected`, and only then issues the connect.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidProfile`] if `name` is unknown. No controller call
    ///   is made in that case.
    /// - [`Error::Timeout`] if the old connection never went down.
    /// - [`Error::Controller`] if any call fails.
    pub fn connect(&self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(Error::InvalidProfile(name.to_string()));
        }

        self.disconnect_all()?;
        poll::wait_until("existing connections to close", self.poll, || {
            Ok(!self.any_connected()?)
        })?;

        log::info!("connecting {name}");
        self.controller.connect(name)
    }
}
