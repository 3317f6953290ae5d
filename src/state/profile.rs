//! VPN profile types.

use serde::Serialize;

use super::ConnectionState;

/// A named connection configured in the VPN application.
///
/// Only the name is known to us; everything else lives in the application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Profile {
    /// Display name, also the key the application uses for `connect`.
    pub name: String,
}

impl Profile {
    /// Wrap a profile name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One row of `list --json` output.
#[derive(Debug, Serialize)]
pub struct ProfileStatus<'a> {
    /// Profile name.
    pub name: &'a str,
    /// State token at the time of the query.
    pub state: String,
}

impl<'a> ProfileStatus<'a> {
    /// Pair a profile with its current state.
    #[must_use]
    pub fn new(profile: &'a Profile, state: &ConnectionState) -> Self {
        Self {
            name: &profile.name,
            state: state.to_string(),
        }
    }
}
