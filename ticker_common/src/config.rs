//! Startup configuration for the display loop.
//!
//! All values are read once at startup and never change while the loop runs.

use std::time::Duration;

use crate::error::TickerError;
use crate::tickers::DEFAULT_TICKERS;

/// Seconds each ticker stays on screen.
pub const DEFAULT_DWELL_SECS: u64 = 10;
/// Seconds after which a cached quote is fetched again.
pub const DEFAULT_REFRESH_SECS: u64 = 30;
/// Maximum number of cached tickers.
pub const DEFAULT_MAX_CACHE_SIZE: usize = 10;
/// Pause between loop iterations, in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 100;

/// Loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rotation order.
    pub tickers: Vec<String>,
    /// Time each ticker stays active.
    pub dwell: Duration,
    /// Age after which a cached quote is stale.
    pub refresh_interval: Duration,
    /// Cache bound.
    pub max_cache_size: usize,
    /// Sleep between iterations.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickers: DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
            dwell: Duration::from_secs(DEFAULT_DWELL_SECS),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl Config {
    /// Reject configurations the loop cannot run with.
    pub fn validate(&self) -> Result<(), TickerError> {
        if self.tickers.is_empty() {
            return Err(TickerError::EmptyTickerList);
        }
        if self.max_cache_size == 0 {
            return Err(TickerError::InvalidConfig(
                "max cache size must be at least 1".to_string(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(TickerError::InvalidConfig(
                "poll interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
