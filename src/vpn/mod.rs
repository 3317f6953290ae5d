//! Boundary to the external VPN application.
//!
//! The application is scripted as a black box: list calls return
//! human-readable, comma-separated text and state-changing calls return
//! nothing useful. [`Controller`] is that boundary; [`Viscosity`] drives the
//! real application through `osascript`.

mod viscosity;

#[cfg(test)]
pub(crate) mod mock;

pub use viscosity::Viscosity;

use crate::error::Result;

/// Scripted request/response calls offered by the VPN application.
///
/// The two list calls must answer in the same relative order: the registry
/// correlates names and states purely by position.
pub trait Controller {
    /// Raw output of "name of every connection".
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Controller`] if the call fails.
    fn profile_names(&self) -> Result<String>;

    /// Raw output of "state of every connection", in the same order as
    /// [`Controller::profile_names`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Controller`] if the call fails.
    fn profile_states(&self) -> Result<String>;

    /// Disconnect every active connection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Controller`] if the call fails.
    fn disconnect_all(&self) -> Result<()>;

    /// Start connecting the named profile. Returns as soon as the
    /// application accepted the request, not when the tunnel is up.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Controller`] if the call fails.
    fn connect(&self, profile: &str) -> Result<()>;
}

/// Split a list response such as `"profile1, profile2, profile3\n"`.
///
/// Trims the trailing newline, strips commas and splits on whitespace. A
/// name that itself contains a space or a comma comes back mangled; the
/// application offers no quoting, so neither do we.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.trim_end_matches(['\n', '\r'])
        .replace(',', "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_basic() {
        assert_eq!(
            parse_list("profile1, profile2, profile3\n"),
            vec!["profile1", "profile2", "profile3"]
        );
    }

    #[test]
    fn test_parse_list_single_and_empty() {
        assert_eq!(parse_list("office\n"), vec!["office"]);
        assert!(parse_list("\n").is_empty());
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_parse_list_name_with_space_is_split() {
        // Known limitation: names are not quoted by the application.
        assert_eq!(
            parse_list("home lab, office\n"),
            vec!["home", "lab", "office"]
        );
    }
}
