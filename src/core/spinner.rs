//! Animated progress indicator for connection transitions.
//!
//! A [`Spinner`] cycles through its glyphs and colors, each with its own
//! modulus, so three glyphs over two colors repeat every six frames. It is
//! driven by two callbacks evaluated fresh on every frame: a status text
//! and a continuation predicate. The predicate usually re-queries the VPN
//! application, which makes the frame interval the poll interval too.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::constants;
use crate::error::Result;
use crate::theme::{self, Paint};

/// Glyph and color cycle of a progress indicator.
#[derive(Clone)]
pub struct Spinner {
    symbols: Vec<&'static str>,
    colors: Vec<Paint>,
    interval: Duration,
}

impl Spinner {
    /// Build a spinner. Returns `None` if either sequence is empty.
    #[must_use]
    pub fn new(symbols: &[&'static str], colors: &[Paint]) -> Option<Self> {
        if symbols.is_empty() || colors.is_empty() {
            return None;
        }
        Some(Self {
            symbols: symbols.to_vec(),
            colors: colors.to_vec(),
            interval: constants::FRAME_INTERVAL,
        })
    }

    /// Spinner shown while a profile comes up.
    #[must_use]
    pub fn connecting() -> Self {
        Self {
            symbols: vec![constants::GLYPH_CONNECT; 3],
            colors: vec![theme::green, theme::black, theme::yellow],
            interval: constants::FRAME_INTERVAL,
        }
    }

    /// Spinner shown while connections go down.
    #[must_use]
    pub fn disconnecting() -> Self {
        Self {
            symbols: vec![constants::GLYPH_DISCONNECT; 3],
            colors: vec![theme::red, theme::black, theme::yellow],
            interval: constants::FRAME_INTERVAL,
        }
    }

    /// Override the delay between frames.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Colorized glyph for the given frame number.
    #[must_use]
    pub fn glyph(&self, frame: usize) -> String {
        let paint = self.colors[frame % self.colors.len()];
        paint(self.symbols[frame % self.symbols.len()])
    }

    /// Animate on `out` while `active` returns `true`, then clear the line.
    ///
    /// Each frame overwrites the current line with `<glyph>  <status>`.
    /// Returns the number of frames drawn, zero if `active` was false right
    /// away.
    ///
    /// # Errors
    ///
    /// Propagates the first error from `active` (after clearing the line)
    /// or from writing to `out`.
    pub fn run<W, S, P>(&self, out: &mut W, mut status: S, mut active: P) -> Result<usize>
    where
        W: Write,
        S: FnMut() -> String,
        P: FnMut() -> Result<bool>,
    {
        let mut frame = 0;
        let outcome = loop {
            match active() {
                Ok(true) => {}
                Ok(false) => break Ok(frame),
                Err(e) => break Err(e),
            }

            queue!(
                out,
                Print('\r'),
                Print(self.glyph(frame)),
                Print("  "),
                Print(status()),
                Clear(ClearType::UntilNewLine)
            )?;
            out.flush()?;

            thread::sleep(self.interval);
            frame += 1;
        };

        queue!(out, Print('\r'), Clear(ClearType::UntilNewLine))?;
        out.flush()?;
        log::trace!("spinner stopped after {frame} frame(s)");
        outcome
    }
}
