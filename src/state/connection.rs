//! VPN connection state types.

use std::fmt;
use std::str::FromStr;

/// Connection state of a single profile as reported by the VPN application.
///
/// `NotFound` is never reported by the application itself: it is the
/// sentinel returned when a lookup names a profile the registry does not
/// know.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// The tunnel is up.
    Connected,
    /// No tunnel for this profile.
    #[default]
    Disconnected,
    /// No state matched the requested profile name.
    NotFound,
    /// Any transitional state token (`Connecting`, `Authenticating`, ...),
    /// kept verbatim for display.
    Other(String),
}

impl ConnectionState {
    /// Check if the profile is fully connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Raw token as the VPN application spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::NotFound => "NotFound",
            Self::Other(token) => token,
        }
    }
}

impl FromStr for ConnectionState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Connected" => Self::Connected,
            "Disconnected" => Self::Disconnected,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_states() {
        assert_eq!(
            "Connected".parse::<ConnectionState>(),
            Ok(ConnectionState::Connected)
        );
        assert_eq!(
            "Disconnected".parse::<ConnectionState>(),
            Ok(ConnectionState::Disconnected)
        );
    }

    #[test]
    fn test_transitional_state_is_not_connected() {
        let state: ConnectionState = "Connecting".parse().unwrap();
        assert_eq!(state, ConnectionState::Other("Connecting".to_string()));
        assert!(!state.is_connected());
        assert_eq!(state.to_string(), "Connecting");
    }

    #[test]
    fn test_not_found_is_never_parsed() {
        // The sentinel only comes from lookups, an application token of the
        // same spelling stays opaque.
        let state: ConnectionState = "NotFound".parse().unwrap();
        assert_eq!(state, ConnectionState::Other("NotFound".to_string()));
    }
}
