//! Optional TOML configuration.
//!
//! Every key is optional and a missing default file means built-in
//! defaults, so the tool works with no configuration at all.
//!
//! ```toml
//! application = "Viscosity"
//! poll_interval_ms = 1000
//! max_poll_attempts = 60
//! frame_interval_ms = 300
//! disconnect_grace_ms = 2000
//! transition_timeout_secs = 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants;
use crate::core::PollPolicy;
use crate::error::{Error, Result};

/// Runtime settings, after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// AppleScript name of the VPN application.
    pub application: String,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
    pub frame_interval_ms: u64,
    pub disconnect_grace_ms: u64,
    pub transition_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application: constants::DEFAULT_APPLICATION.to_string(),
            poll_interval_ms: millis(constants::POLL_INTERVAL),
            max_poll_attempts: constants::MAX_POLL_ATTEMPTS,
            frame_interval_ms: millis(constants::FRAME_INTERVAL),
            disconnect_grace_ms: millis(constants::DISCONNECT_GRACE),
            transition_timeout_secs: constants::TRANSITION_TIMEOUT.as_secs(),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl Config {
    /// Load config from `explicit`, or from the default location if `None`.
    ///
    /// An explicitly named file must exist; the default one may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    log::debug!("config: no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| Error::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|reason| Error::Config {
            path: path.clone(),
            reason,
        })?;
        log::debug!("config: loaded {}", path.display());
        Ok(config)
    }

    /// Parse config text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error message on invalid input, unknown keys, a
    /// zero `max_poll_attempts`, or a transition timeout that does not
    /// outlast the disconnect grace period.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.max_poll_attempts == 0 {
            return Err("max_poll_attempts must be at least 1".to_string());
        }
        if config.transition_timeout() <= config.disconnect_grace() {
            return Err(format!(
                "transition_timeout_secs ({}s) must be longer than disconnect_grace_ms ({}ms)",
                config.transition_timeout_secs, config.disconnect_grace_ms
            ));
        }
        Ok(config)
    }

    /// Polling policy used while waiting for connections to close.
    #[must_use]
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_attempts: self.max_poll_attempts,
        }
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    #[must_use]
    pub fn disconnect_grace(&self) -> Duration {
        Duration::from_millis(self.disconnect_grace_ms)
    }

    #[must_use]
    pub fn transition_timeout(&self) -> Duration {
        Duration::from_secs(self.transition_timeout_secs)
    }
}

/// `<platform config dir>/vpnctl/config.toml`.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.application, "Viscosity");
        assert_eq!(config.poll_policy().interval, Duration::from_secs(1));
        assert_eq!(config.frame_interval(), Duration::from_millis(300));
        assert_eq!(config.disconnect_grace(), Duration::from_secs(2));
        assert_eq!(config.transition_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config = Config::parse(
            r#"
application = "Viscosity Beta"
frame_interval_ms = 100
max_poll_attempts = 5
"#,
        )
        .unwrap();
        assert_eq!(config.application, "Viscosity Beta");
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
        assert_eq!(config.poll_policy().max_attempts, 5);
        assert_eq!(config.disconnect_grace_ms, 2000);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = Config::parse("colour = true").unwrap_err();
        assert!(err.contains("colour"));
    }

    #[test]
    fn test_parse_rejects_zero_attempts() {
        assert!(Config::parse("max_poll_attempts = 0").is_err());
    }

    #[test]
    fn test_parse_rejects_timeout_within_grace() {
        let err = Config::parse("transition_timeout_secs = 1\ndisconnect_grace_ms = 1500")
            .unwrap_err();
        assert!(err.contains("transition_timeout_secs"));
        assert!(Config::parse("transition_timeout_secs = 2").is_err());
        assert!(Config::parse("transition_timeout_secs = 3").is_ok());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let path = Path::new("/nonexistent/vpnctl/config.toml");
        let err = Config::load(Some(path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir()
            .join(format!("vpnctl-test-config-{}.toml", std::process::id()));
        std::fs::write(&path, "poll_interval_ms = 250\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.poll_policy().interval, Duration::from_millis(250));

        let _ = std::fs::remove_file(&path);
    }
}
