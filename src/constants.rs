//! Application-wide constants and configuration defaults.
//!
//! This module defines the static values used throughout vpnctl, including
//! timing defaults, the scripted application, spinner glyphs, and CLI
//! messages.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === External Controller ===

/// AppleScript name of the VPN application we drive.
pub const DEFAULT_APPLICATION: &str = "Viscosity";
/// Interpreter used to run AppleScript snippets.
pub const OSASCRIPT_BIN: &str = "osascript";

// === Timing Configuration ===

/// Delay between two spinner frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(300);
/// Delay between two state polls while waiting for a disconnect.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// State polls allowed before giving up on a disconnect.
pub const MAX_POLL_ATTEMPTS: u32 = 60;
/// `off` keeps animating at least this long, even if the states already
/// read Disconnected.
pub const DISCONNECT_GRACE: Duration = Duration::from_secs(2);
/// Longest `on`/`off` will animate before failing.
pub const TRANSITION_TIMEOUT: Duration = Duration::from_secs(60);

// === Path Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "vpnctl";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Spinner Glyphs ===

/// Nerd Font `nf-mdi-lan_connect`.
pub const GLYPH_CONNECT: &str = "\u{f0318}";
/// Nerd Font `nf-mdi-lan_disconnect`.
pub const GLYPH_DISCONNECT: &str = "\u{f0319}";

// === Messages: CLI Output ===

/// Width of the name column in `list`.
pub const LIST_NAME_WIDTH: usize = 30;

pub const CLI_MSG_DISCONNECTING: &str = "Disconnecting";
pub const CLI_MSG_DISCONNECTED: &str = "VPN is disconnected";
pub const CLI_MSG_CONNECTED: &str = "VPN is connected to ";
pub const CLI_MSG_LIST_HINT: &str = "Run `vpn list` to see the list of available profiles";
pub const CLI_MSG_NO_PROFILES: &str = "No VPN profiles configured";
