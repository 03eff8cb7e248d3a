//! Quote sources consulted by the display loop.
//!
//! A [`DataSource`] turns a ticker symbol into a [`Quote`] or a [`FetchError`]. It must
//! never panic on bad upstream data; the loop treats every error as "no fresh data".

use std::collections::HashMap;

use chrono::Local;
use rand::Rng;

use crate::error::FetchError;
use crate::model::quote::Quote;

/// Anything that can fetch a quote for a ticker.
pub trait DataSource {
    /// Fetch the current quote for `ticker`. Blocks until done or failed.
    fn fetch(&mut self, ticker: &str) -> Result<Quote, FetchError>;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn fetch(&mut self, ticker: &str) -> Result<Quote, FetchError> {
        (**self).fetch(ticker)
    }
}

/// Per-ticker session state of the synthetic market.
struct Session {
    open: f64,
    last: f64,
    high: f64,
    low: f64,
    volume: u64,
}

/// Offline source producing a random walk per ticker. Never fails.
#[derive(Default)]
pub struct SyntheticSource {
    sessions: HashMap<String, Session>,
}

impl SyntheticSource {
    /// Source with no sessions yet; each ticker opens at a random price on first fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the next synthetic price using a small random walk around `current_price`.
    ///
    /// The change is sampled uniformly from `[-1%, +1%]` and the result is clamped to a
    /// minimum positive value.
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }
}

impl DataSource for SyntheticSource {
    fn fetch(&mut self, ticker: &str) -> Result<Quote, FetchError> {
        let mut rng = rand::rng();
        let session = self.sessions.entry(ticker.to_string()).or_insert_with(|| {
            let open = rng.random_range(20.0..500.0);
            Session {
                open,
                last: open,
                high: open,
                low: open,
                volume: 0,
            }
        });

        session.last = Self::next_price(session.last);
        session.high = session.high.max(session.last);
        session.low = session.low.min(session.last);
        session.volume += rng.random_range(1_000..250_000);

        let spread = (session.last * 0.0005).max(0.01);
        Ok(Quote {
            last: Some(session.last),
            bid: Some(session.last - spread),
            ask: Some(session.last + spread),
            volume: Some(session.volume),
            high: Some(session.high),
            low: Some(session.low),
            prev_close: Some(session.open),
            received_at: Local::now(),
        })
    }
}
