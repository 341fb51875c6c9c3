//! Price Board — a terminal board showing gold and silver spot-proxy prices.
//!
//! The board polls the price API once at startup, then every `--interval-secs`
//! (60 by default), and whenever Enter is pressed. Each cycle prints both
//! prices with two decimals and thousands separators, the time of the update
//! and a status flag. A failed cycle flips the status to `Error` and leaves the
//! previous prices on screen.
//!
//! Usage example (CLI):
//! ```bash
//! price_board --currency usd --interval-secs 60
//! ```
//!
//! Wiring:
//! - `HttpPriceSource` — one blocking GET per cycle.
//! - `TerminalBoard` — the display sink, rendering to stdout.
//! - `PriceRefresher` — fetch, format and publish.
//! - `RefreshScheduler` — startup, timer and manual dispatch; cycles run on
//!   their own threads and may overlap.
//! - stdin reader and Ctrl+C handler — feed the manual and shutdown channels.
#![warn(missing_docs)]
mod args;
mod board;
mod command;
mod input;

use crate::args::Args;
use crate::board::TerminalBoard;
use clap::Parser;
use crossbeam_channel::{unbounded, Sender};
use log::{debug, error, info};
use price_common::scheduler::{RefreshJob, RefreshScheduler};
use price_common::source::HttpPriceSource;
use price_common::{BoardError, PriceRefresher, Result};
use std::io;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), BoardError> {
    init_logger();
    let args = Args::parse();
    let config = args.to_config();

    let source = Arc::new(HttpPriceSource::new(&config)?);
    info!("Polling {} every {:?}", source.url(), config.interval);

    let board = Arc::new(TerminalBoard::new(io::stdout(), &config.currency));
    let refresher = Arc::new(PriceRefresher::new(source, board));

    let (manual_tx, manual_rx) = unbounded::<()>();
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    install_ctrlc_handler(shutdown_tx.clone())?;

    thread::spawn(move || {
        if let Err(e) = input::read_commands(io::stdin().lock(), manual_tx, shutdown_tx) {
            error!("Input loop failed: {}", e);
        }
    });

    let job: RefreshJob = Arc::new(move |trigger| {
        debug!("Refresh triggered by {:?}", trigger);
        refresher.refresh();
    });

    info!("Board is running. Press Enter to refresh, q to quit, Ctrl+C to exit.");
    let dispatched = RefreshScheduler::with_interval(config.interval, manual_rx, shutdown_rx).run(job);
    info!("Board stopped after {} refresh cycles", dispatched);

    Ok(())
}

/// Routes Ctrl+C to the scheduler's shutdown channel.
fn install_ctrlc_handler(shutdown_tx: Sender<()>) -> Result<(), BoardError> {
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down board...");
        let _ = shutdown_tx.send(());
    })
    .map_err(|e| BoardError::Signal(format!("Error setting Ctrl+C handler: {}", e)))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
