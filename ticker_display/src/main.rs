//! Ticker Display — rotates through a list of stock tickers, fetching quotes from the
//! Tiingo IEX API and drawing them one at a time.
//!
//! Each ticker stays on screen for a fixed dwell time. Quotes are cached per ticker and
//! fetched again only once they are older than the refresh interval, lazily, when their
//! ticker comes back into view. Failed fetches keep the previous quote on screen.
//!
//! Usage example (CLI):
//! ```bash
//! TIINGO_API_KEY=... ticker_display --tickers AAPL,MSFT,NVDA --dwell-secs 10
//! ticker_display --demo --path ./tickers.txt
//! ```
//!
//! The ticker file should contain symbols separated by commas, spaces, or new lines.
//! Press Ctrl+C to stop.
#![warn(missing_docs)]
mod args;
mod terminal;
mod tiingo;

use crate::args::Args;
use crate::terminal::TerminalRenderer;
use crate::tiingo::TiingoSource;
use clap::Parser;
use crossbeam_channel::bounded;
use log::{info, warn};
use std::io;
use ticker_common::clock::SystemClock;
use ticker_common::source::{DataSource, SyntheticSource};
use ticker_common::{Result, TickerError, TickerLoop};

fn main() -> Result<(), TickerError> {
    init_logger();
    let args = Args::parse();
    let config = args.to_config()?;
    info!("Tickers: {:?}", config.tickers);

    let source: Box<dyn DataSource> = if args.demo {
        warn!("Demo mode: quotes are synthetic");
        Box::new(SyntheticSource::new())
    } else {
        let api_key = args.api_key.as_deref().ok_or_else(|| {
            TickerError::InvalidConfig(
                "missing API key: pass --api-key or set TIINGO_API_KEY".to_string(),
            )
        })?;
        Box::new(TiingoSource::new(&args.base_url, api_key, args.timeout())?)
    };

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down display...");
        if shutdown_tx.try_send(()).is_err() {
            warn!("Shutdown already in progress");
        }
    })
    .map_err(|e| TickerError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let renderer = TerminalRenderer::new(io::stdout());
    let mut ticker_loop = TickerLoop::new(&config, source, renderer, SystemClock::new())?;
    info!("Display is running. Press Ctrl+C to exit.");
    ticker_loop.run(&shutdown_rx);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
