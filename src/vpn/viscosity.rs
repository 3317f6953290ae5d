//! Viscosity driven through its AppleScript dictionary.

use std::process::Command;

use super::Controller;
use crate::constants;
use crate::error::{Error, Result};

/// AppleScript-backed controller for the Viscosity application.
#[derive(Debug, Clone)]
pub struct Viscosity {
    application: String,
}

impl Viscosity {
    /// Controller for the application with the given AppleScript name.
    #[must_use]
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }

    /// Ask the application for a property of every connection.
    fn every_connection(&self, op: &str, property: &str) -> Result<String> {
        let tell = format!("tell application \"{}\"", escape(&self.application));
        let query = format!("{property} of (every connection)");
        run_osascript(op, &[&tell, &query, "end tell"])
    }

    fn tell(&self, op: &str, command: &str) -> Result<()> {
        let script = format!(
            "tell application \"{}\" to {command}",
            escape(&self.application)
        );
        run_osascript(op, &[&script]).map(|_| ())
    }
}

impl Default for Viscosity {
    fn default() -> Self {
        Self::new(constants::DEFAULT_APPLICATION)
    }
}

impl Controller for Viscosity {
    fn profile_names(&self) -> Result<String> {
        self.every_connection("names", "name")
    }

    fn profile_states(&self) -> Result<String> {
        self.every_connection("states", "state")
    }

    fn disconnect_all(&self) -> Result<()> {
        self.tell("disconnect-all", "disconnectall")
    }

    fn connect(&self, profile: &str) -> Result<()> {
        self.tell("connect", &format!("connect \"{}\"", escape(profile)))
    }
}

/// Run `osascript` with one `-e` argument per script line and return stdout.
fn run_osascript(op: &str, lines: &[&str]) -> Result<String> {
    let mut cmd = Command::new(constants::OSASCRIPT_BIN);
    for line in lines {
        cmd.arg("-e").arg(line);
    }
    log::debug!("controller {op}: {} {:?}", constants::OSASCRIPT_BIN, lines);

    let output = cmd
        .output()
        .map_err(|e| Error::controller(op, format!("failed to run osascript: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::controller(
            op,
            format!("{} ({stderr})", output.status),
        ));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| Error::controller(op, format!("output is not UTF-8: {e}")))?;
    log::trace!("controller {op} returned {stdout:?}");
    Ok(stdout)
}

/// Escape a value for use inside an AppleScript string literal.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_name() {
        assert_eq!(escape("office-vpn"), "office-vpn");
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_default_application() {
        assert_eq!(Viscosity::default().application, "Viscosity");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_missing_osascript_is_controller_error() {
        let err = Viscosity::default().profile_names().unwrap_err();
        assert!(matches!(err, Error::Controller { ref command, .. } if command == "names"));
    }
}
