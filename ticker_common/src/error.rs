//! Error types shared between the display loop and its collaborators.
//!
//! `FetchError` covers everything that can go wrong while obtaining a quote and is
//! always absorbed by the loop. `TickerError` unifies startup and I/O failures
//! (configuration, ticker files, output) so binaries can propagate a single type.
use std::io;

use thiserror::Error;

/// Failure of a single quote fetch.
///
/// All variants are handled the same way by the loop: no fresh data this cycle,
/// the previously cached quote stays on screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or connection failure (DNS, TLS, timeout, non-success status).
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded into a quote.
    #[error("parse error: {0}")]
    Parse(String),

    /// Well-formed response carrying an `error` field from the upstream API.
    #[error("upstream error: {0}")]
    Logical(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Unified error type for startup, configuration and I/O.
#[derive(Error, Debug)]
pub enum TickerError {
    /// I/O error originating from files or output streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a ticker file or ticker list.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),

    /// The rotation has nothing to rotate through.
    #[error("Ticker list is empty")]
    EmptyTickerList,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
