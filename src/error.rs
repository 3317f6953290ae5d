//! Typed errors for the VPN controller.
//!
//! Library code returns [`Error`] so the CLI layer can tell a recoverable
//! user mistake ([`Error::InvalidProfile`]) apart from the fatal cases.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while talking to the VPN application or loading config.
#[derive(Debug, Error)]
pub enum Error {
    /// The external controller call failed or returned unusable output.
    #[error("controller call `{command}` failed: {reason}")]
    Controller {
        /// Short name of the controller operation.
        command: String,
        /// What went wrong.
        reason: String,
    },

    /// The requested profile is not one the VPN application knows about.
    #[error("{0} is an invalid VPN profile")]
    InvalidProfile(String),

    /// A bounded wait ran out before the transition was confirmed.
    #[error("timed out after {after:?} waiting for {what}")]
    Timeout {
        /// The condition that never became true.
        what: String,
        /// How long we waited.
        after: Duration,
    },

    /// Writing to the terminal failed.
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be read or parsed.
    #[error("invalid config file {}: {reason}", path.display())]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// Parse or I/O error text.
        reason: String,
    },
}

impl Error {
    pub(crate) fn controller(command: &str, reason: impl Into<String>) -> Self {
        Self::Controller {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the process can report this error and exit cleanly without a
    /// diagnostic report.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidProfile(_))
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
