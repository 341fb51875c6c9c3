//! Error types shared between the library and the board binary.
//!
//! `BoardError` covers transport, decoding, channel and configuration failures.
//! Inside a refresh cycle these errors never escape: the refresher turns them
//! into an `Error` status on the display. They are fatal only at startup.
use std::io;

use thiserror::Error;

/// Unified error type for the price board.
#[derive(Error, Debug)]
pub enum BoardError {
    /// I/O error originating from the standard library (stdin, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP request could not be built, sent, or its body read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The price API answered with a non-2xx status.
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Failure while decoding the JSON body via serde_json.
    #[error("JSON deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Invalid configuration value with a human-readable message.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The Ctrl+C handler could not be installed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// Channel send failed (e.g., scheduler already stopped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}
