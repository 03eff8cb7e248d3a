//! Bounded per-ticker quote cache.
//!
//! The cache maps a ticker symbol to the last successfully fetched quote together
//! with the monotonic time the fetch completed. It exposes three core operations:
//!
//! - `QuoteCache::needs_refresh(ticker, now)` — true when the ticker has no entry or its
//!   entry is older than the refresh interval.
//! - `QuoteCache::store(ticker, quote, now)` — upsert and, if the cache overflowed, evict
//!   the least-recently-fetched entry.
//! - `QuoteCache::get(ticker)` — read-only lookup; reading never counts as a refresh.
//!
//! Design notes:
//! - Timestamps are `Duration`s read from a [`Clock`](crate::clock::Clock), so tests can
//!   drive the cache without sleeping.
//! - Eviction ties on `fetched_at` are broken by the lexicographically smallest ticker.
//! - The cache is not synchronized; it is owned by the single display loop.

use std::collections::HashMap;
use std::time::Duration;

use crate::model::quote::Quote;

/// Internal bookkeeping for a cached quote.
struct CacheEntry {
    quote: Quote,
    fetched_at: Duration,
}

/// Bounded mapping from ticker symbol to its most recent quote.
pub struct QuoteCache {
    entries: HashMap<String, CacheEntry>,
    /// Age after which an entry must be fetched again.
    refresh_interval: Duration,
    /// Upper bound on the number of entries, enforced after each store.
    max_size: usize,
}

impl QuoteCache {
    /// Create an empty cache.
    pub fn new(refresh_interval: Duration, max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            refresh_interval,
            max_size,
        }
    }

    /// Whether `ticker` must be fetched at time `now`.
    ///
    /// The boundary is exclusive: an entry exactly `refresh_interval` old is still fresh.
    pub fn needs_refresh(&self, ticker: &str, now: Duration) -> bool {
        match self.entries.get(ticker) {
            Some(entry) => now.saturating_sub(entry.fetched_at) > self.refresh_interval,
            None => true,
        }
    }

    /// Upsert `quote` for `ticker`, fetched at `now`.
    ///
    /// Returns the evicted ticker when the insert pushed the cache over its bound.
    pub fn store(&mut self, ticker: &str, quote: Quote, now: Duration) -> Option<String> {
        self.entries
            .entry(ticker.to_string())
            .and_modify(|entry| {
                entry.quote = quote.clone();
                entry.fetched_at = now;
            })
            .or_insert(CacheEntry {
                quote,
                fetched_at: now,
            });

        if self.entries.len() > self.max_size {
            self.evict_oldest()
        } else {
            None
        }
    }

    /// Cached quote for `ticker`, if any.
    pub fn get(&self, ticker: &str) -> Option<&Quote> {
        self.entries.get(ticker).map(|entry| &entry.quote)
    }

    /// Monotonic time the cached quote for `ticker` was fetched.
    pub fn fetched_at(&self, ticker: &str) -> Option<Duration> {
        self.entries.get(ticker).map(|entry| entry.fetched_at)
    }

    /// Number of cached tickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `ticker` has a cached quote.
    pub fn contains(&self, ticker: &str) -> bool {
        self.entries.contains_key(ticker)
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self
            .entries
            .iter()
            .min_by(|(a_ticker, a), (b_ticker, b)| {
                a.fetched_at
                    .cmp(&b.fetched_at)
                    .then_with(|| a_ticker.cmp(b_ticker))
            })
            .map(|(ticker, _)| ticker.clone())?;
        self.entries.remove(&oldest);
        Some(oldest)
    }
}
