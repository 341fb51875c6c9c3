//! Terminal rendering of the display slots.
//!
//! `TerminalBoard` keeps the rendered `DisplayState` and prints one line per
//! asset for every batch it applies:
//!
//! ```text
//! GOLD      2,345.60 USD  Updated 12:00:00  [OK] *
//! SILVER       29.10 USD  Updated 12:00:00  [OK]
//! ```
//!
//! A trailing `*` marks an asset pulsed by that batch.
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::error;
use price_common::display::{DisplaySink, DisplayState, SlotState, SlotUpdate};
use price_common::Asset;
use strum::IntoEnumIterator;

/// Text shown in a slot nothing was written to yet.
const LOADING: &str = "Loading...";

struct Screen<W> {
    out: W,
    state: DisplayState,
}

/// Display sink printing the board to a writer (stdout in the binary).
pub struct TerminalBoard<W: Write + Send> {
    currency: String,
    screen: Mutex<Screen<W>>,
}

impl<W: Write + Send> TerminalBoard<W> {
    /// Create a new board writing to `out`, labelling prices with `currency`.
    pub fn new(out: W, currency: &str) -> Self {
        Self {
            currency: currency.trim().to_ascii_uppercase(),
            screen: Mutex::new(Screen {
                out,
                state: DisplayState::default(),
            }),
        }
    }

    /// Snapshot of the rendered slots.
    pub fn state(&self) -> DisplayState {
        self.lock().state.clone()
    }

    /// Consumes the board and returns its writer.
    pub fn into_writer(self) -> W {
        self.screen
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }

    fn lock(&self) -> MutexGuard<'_, Screen<W>> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Formats one board line.
pub fn render_line(asset: Asset, slot: &SlotState, currency: &str, pulsed: bool) -> String {
    let status = slot
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "--".to_string());
    let mut line = format!(
        "{:<8}{:>12} {}  {}  [{}]",
        asset.to_string(),
        slot.price_text.as_deref().unwrap_or(LOADING),
        currency,
        slot.updated_text.as_deref().unwrap_or(""),
        status
    );
    if pulsed {
        line.push_str(" *");
    }
    line
}

impl<W: Write + Send> DisplaySink for TerminalBoard<W> {
    fn apply(&self, updates: &[SlotUpdate]) {
        let mut screen = self.lock();
        let mut pulsed = HashSet::new();
        for update in updates {
            if let SlotUpdate::Pulse(asset) = update {
                pulsed.insert(*asset);
            }
            screen.state.apply(update);
        }

        let lines: Vec<String> = Asset::iter()
            .map(|asset| {
                render_line(
                    asset,
                    screen.state.slot(asset),
                    &self.currency,
                    pulsed.contains(&asset),
                )
            })
            .collect();
        if let Err(e) = write_lines(&mut screen.out, &lines) {
            error!("Failed to render board: {}", e);
        }
    }

    fn rendered_price(&self, asset: Asset) -> Option<String> {
        self.lock().state.slot(asset).price_text.clone()
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    out.flush()
}
