//!
//! Core of the rotating stock ticker display.
//!
//! This crate aggregates:
//! - `error` — `FetchError` for quote fetches and the unified `TickerError`.
//! - `result` — handy `Result<T, TickerError>` alias.
//! - `config` — startup configuration with validation.
//! - `tickers` — ticker list parsing helpers.
//! - `clock` — monotonic time abstraction with a manual clock for tests.
//! - `model` — `Quote`, the bounded `QuoteCache`, and the `TickerRotator`.
//! - `api` — Tiingo endpoint helpers and typed payload parsing.
//! - `view` — text layout of a display frame.
//! - `source` / `render` — the `DataSource` and `Renderer` collaborator traits.
//! - `ticker_loop` — the loop tying rotation, caching and drawing together.
#![warn(missing_docs)]
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod result;
pub mod source;
pub mod tickers;
pub mod ticker_loop;
pub mod view;

pub use config::Config;
pub use error::{FetchError, TickerError};
pub use model::quote::Quote;
pub use result::Result;
pub use ticker_loop::{FetchOutcome, Step, TickerLoop};
