//! The display loop: rotate, refresh if stale, draw, wait.
//!
//! One iteration always runs in the same order:
//!
//! 1. `TickerRotator::tick` picks the active ticker for the current time.
//! 2. `QuoteCache::needs_refresh` decides whether to fetch; a fetch blocks the loop.
//! 3. The renderer draws the active ticker with whatever the cache holds.
//!
//! Fetch failures are logged and absorbed: the previous quote stays cached and on screen.
//! [`TickerLoop::run`] repeats iterations until the shutdown channel fires or disconnects.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{debug, info, warn};

use crate::clock::Clock;
use crate::config::Config;
use crate::error::{FetchError, TickerError};
use crate::model::cache::QuoteCache;
use crate::model::rotator::TickerRotator;
use crate::render::Renderer;
use crate::source::DataSource;
use crate::view::Status;

/// What happened to the active ticker's data during one iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Cached quote was fresh; no fetch.
    Cached,
    /// A fetch succeeded and was stored, possibly evicting another ticker.
    Fetched {
        /// Ticker dropped to keep the cache within its bound.
        evicted: Option<String>,
    },
    /// A fetch failed; the cache is unchanged.
    Failed(FetchError),
}

/// Result of a single iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Ticker that was drawn.
    pub ticker: String,
    /// What happened to its data.
    pub fetch: FetchOutcome,
}

/// Owns all loop state and both collaborators.
pub struct TickerLoop<S, R, C> {
    rotator: TickerRotator,
    cache: QuoteCache,
    source: S,
    renderer: R,
    clock: C,
    poll_interval: Duration,
    last_drawn: Option<String>,
}

impl<S, R, C> TickerLoop<S, R, C>
where
    S: DataSource,
    R: Renderer,
    C: Clock,
{
    /// Validate `config` and start the rotation at the clock's current time.
    pub fn new(config: &Config, source: S, renderer: R, clock: C) -> Result<Self, TickerError> {
        config.validate()?;
        let rotator = TickerRotator::new(config.tickers.clone(), config.dwell, clock.now())?;
        Ok(Self {
            rotator,
            cache: QuoteCache::new(config.refresh_interval, config.max_cache_size),
            source,
            renderer,
            clock,
            poll_interval: config.poll_interval,
            last_drawn: None,
        })
    }

    /// Run one iteration.
    pub fn step(&mut self) -> Step {
        let now = self.clock.now();
        let ticker = self.rotator.tick(now).to_string();
        if self.last_drawn.as_deref() != Some(ticker.as_str()) {
            info!("Showing {}", ticker);
        }

        let fetch = if self.cache.needs_refresh(&ticker, now) {
            self.refresh(&ticker)
        } else {
            FetchOutcome::Cached
        };

        self.renderer.draw(&ticker, self.cache.get(&ticker));
        self.last_drawn = Some(ticker.clone());
        Step { ticker, fetch }
    }

    /// Iterate until `shutdown` receives a message or all its senders are dropped.
    pub fn run(&mut self, shutdown: &Receiver<()>) {
        info!(
            "Display loop started: {} tickers, polling every {:?}",
            self.rotator.tickers().len(),
            self.poll_interval
        );
        loop {
            self.step();
            match shutdown.recv_timeout(self.poll_interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) => {
                    info!("Shutdown requested");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Shutdown channel closed, stopping");
                    break;
                }
            }
        }
        info!("Display loop stopped");
    }

    fn refresh(&mut self, ticker: &str) -> FetchOutcome {
        self.renderer.status(ticker, Status::Loading);
        match self.source.fetch(ticker) {
            Ok(quote) => {
                let fetched_at = self.clock.now();
                let evicted = self.cache.store(ticker, quote, fetched_at);
                debug!("Stored {} at {:?}", ticker, fetched_at);
                if let Some(evicted) = &evicted {
                    debug!("Cache full, evicted {}", evicted);
                }
                FetchOutcome::Fetched { evicted }
            }
            Err(e) => {
                warn!("Fetch for {} failed: {}", ticker, e);
                self.renderer.status(ticker, Status::Error);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Read access to the quote cache.
    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// Read access to the rotation state.
    pub fn rotator(&self) -> &TickerRotator {
        &self.rotator
    }

    /// Mutable access to the data source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Read access to the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
