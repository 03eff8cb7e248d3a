//! Dwell-timed rotation through a fixed ticker list.
//!
//! Rotation is driven purely by elapsed time and is independent of whether data for
//! the active ticker is fresh, stale, or missing.

use std::time::Duration;

use crate::error::TickerError;

/// Tracks the active ticker and advances it once per dwell period.
#[derive(Debug)]
pub struct TickerRotator {
    tickers: Vec<String>,
    dwell: Duration,
    active_index: usize,
    last_rotation: Duration,
}

impl TickerRotator {
    /// Start on the first ticker at time `now`.
    ///
    /// Fails with [`TickerError::EmptyTickerList`] when there is nothing to rotate.
    pub fn new(tickers: Vec<String>, dwell: Duration, now: Duration) -> Result<Self, TickerError> {
        if tickers.is_empty() {
            return Err(TickerError::EmptyTickerList);
        }
        Ok(Self {
            tickers,
            dwell,
            active_index: 0,
            last_rotation: now,
        })
    }

    /// Advance at most one position if the dwell has elapsed, then return the active ticker.
    pub fn tick(&mut self, now: Duration) -> &str {
        if now.saturating_sub(self.last_rotation) >= self.dwell {
            self.active_index = (self.active_index + 1) % self.tickers.len();
            self.last_rotation = now;
        }
        &self.tickers[self.active_index]
    }

    /// The active ticker without touching rotation state.
    pub fn active(&self) -> &str {
        &self.tickers[self.active_index]
    }

    /// Position of the active ticker in the list.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The full rotation order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }
}
