//!
//! Common types and the refresh pipeline behind the gold/silver price board.
//!
//! This crate aggregates:
//! - `error` — unified error type `BoardError` used across the workspace.
//! - `result` — handy `Result<T, BoardError>` alias.
//! - `asset` — the two tracked assets and their status flag.
//! - `config` — endpoint, currency and timing defaults plus `BoardConfig`.
//! - `reading` — `PriceReading` values and the typed `PriceResponse`.
//! - `format` — price and timestamp text formatting.
//! - `source` — `PriceSource` trait and the HTTP implementation.
//! - `display` — `DisplaySink` trait and an in-memory recording sink.
//! - `refresher` — fetch, format and publish one refresh cycle.
//! - `scheduler` — startup, timer and manual dispatch of refresh cycles.
#![warn(missing_docs)]
pub mod asset;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod reading;
pub mod refresher;
pub mod result;
pub mod scheduler;
pub mod source;

pub use asset::{Asset, Status};
pub use config::BoardConfig;
pub use error::BoardError;
pub use refresher::{PriceRefresher, RefreshOutcome};
pub use result::Result;
