//! Command-line arguments for the price board.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use price_common::config::{AssetIds, DEFAULT_CURRENCY, DEFAULT_ENDPOINT, DEFAULT_INTERVAL_SECS};
use price_common::{Asset, BoardConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Price endpoint URL, without query string.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Quote currency requested from the API (e.g., `usd`).
    #[clap(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// API identifier of the gold spot proxy.
    #[clap(long, default_value_t = Asset::Gold.default_id().to_string())]
    pub gold_id: String,

    /// API identifier of the silver spot proxy.
    #[clap(long, default_value_t = Asset::Silver.default_id().to_string())]
    pub silver_id: String,

    /// Seconds between automatic refreshes.
    #[clap(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval_secs: u64,

    /// Optional HTTP timeout in seconds. Without it a hung request waits forever.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Builds the library configuration from the parsed flags.
    pub fn to_config(&self) -> BoardConfig {
        BoardConfig {
            endpoint: self.endpoint.trim().to_string(),
            currency: self.currency.trim().to_string(),
            ids: AssetIds {
                gold: self.gold_id.trim().to_string(),
                silver: self.silver_id.trim().to_string(),
            },
            interval: Duration::from_secs(self.interval_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
