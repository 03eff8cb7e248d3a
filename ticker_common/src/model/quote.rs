//! Quote data model.
//!
//! Every market field is optional: the upstream API omits fields freely (bid/ask
//! outside trading hours, `prevClose` on fresh listings) and a missing field never
//! invalidates the others.

use chrono::{DateTime, Local};

/// Market quote for a single ticker symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Last traded price.
    pub last: Option<f64>,
    /// Best bid.
    pub bid: Option<f64>,
    /// Best ask.
    pub ask: Option<f64>,
    /// Session volume.
    pub volume: Option<u64>,
    /// Session high.
    pub high: Option<f64>,
    /// Session low.
    pub low: Option<f64>,
    /// Previous session close, used to compute the change.
    pub prev_close: Option<f64>,
    /// Local wall-clock time the quote was received (not exchange time).
    pub received_at: DateTime<Local>,
}

/// Absolute and percentage move against the previous close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    /// `last - prev_close`.
    pub absolute: f64,
    /// Change relative to the previous close, in percent.
    pub percent: f64,
}

impl Quote {
    /// A quote with every market field absent, received at `received_at`.
    pub fn empty(received_at: DateTime<Local>) -> Self {
        Self {
            last: None,
            bid: None,
            ask: None,
            volume: None,
            high: None,
            low: None,
            prev_close: None,
            received_at,
        }
    }

    /// Change of `last` against `prev_close`, if both are known.
    ///
    /// The percentage is reported as zero when the previous close is not positive.
    pub fn change(&self) -> Option<PriceChange> {
        let (last, prev_close) = (self.last?, self.prev_close?);
        let absolute = last - prev_close;
        let percent = if prev_close > 0.0 {
            absolute / prev_close * 100.0
        } else {
            0.0
        };
        Some(PriceChange { absolute, percent })
    }

    /// Bid and ask, only when both sides are quoted.
    pub fn bid_ask(&self) -> Option<(f64, f64)> {
        Some((self.bid?, self.ask?))
    }

    /// Session high and low, only when both are known.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.high?, self.low?))
    }
}
