//! Terminal color helpers.
//!
//! Colors are plain `fn(&str) -> String` transforms so the spinner can cycle
//! through them independently of its glyphs.

use crossterm::style::{style, Color, Stylize};

use crate::state::ConnectionState;

/// A color transform applied to one glyph or word.
pub type Paint = fn(&str) -> String;

fn paint(s: &str, color: Color) -> String {
    style(s).with(color).to_string()
}

/// Errors and disconnected state.
#[must_use]
pub fn red(s: &str) -> String {
    paint(s, Color::DarkRed)
}

/// Success and connected state.
#[must_use]
pub fn green(s: &str) -> String {
    paint(s, Color::DarkGreen)
}

/// Dimmed spinner frame.
#[must_use]
pub fn black(s: &str) -> String {
    paint(s, Color::Black)
}

/// Pending/caution.
#[must_use]
pub fn yellow(s: &str) -> String {
    paint(s, Color::DarkYellow)
}

/// Colorize a state token for `list`: green when connected, red otherwise.
#[must_use]
pub fn state(state: &ConnectionState) -> String {
    if state.is_connected() {
        green(state.as_str())
    } else {
        red(state.as_str())
    }
}
