//! HTTP quote source backed by the Tiingo IEX endpoint.
//!
//! Requests are blocking; the display loop waits for each one. Transport problems and
//! non-success statuses become `FetchError::Transport`, everything about the body is
//! delegated to `ticker_common::api::parse_quote`.
use std::time::Duration;

use chrono::Local;
use log::debug;
use reqwest::blocking::Client;
use ticker_common::api::{parse_quote, quote_url};
use ticker_common::source::DataSource;
use ticker_common::{FetchError, Quote, TickerError};

/// Blocking Tiingo client.
pub struct TiingoSource {
    client: Client,
    base_url: String,
    token: String,
}

impl TiingoSource {
    /// Build a client with the given request timeout.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, TickerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TickerError::Format(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url, token))
    }

    /// Use a preconfigured client (proxy, TLS roots, ...).
    pub fn with_client(client: Client, base_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            token: token.to_string(),
        }
    }
}

impl DataSource for TiingoSource {
    fn fetch(&mut self, ticker: &str) -> Result<Quote, FetchError> {
        debug!("Fetching {}{}", self.base_url, ticker);
        let url = quote_url(&self.base_url, ticker, &self.token);

        // Errors carry the URL, and with it the token; strip it before reporting.
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            return match parse_quote(&body, Local::now()) {
                Err(FetchError::Logical(message)) => Err(FetchError::Logical(message)),
                _ => Err(FetchError::Transport(format!("HTTP {}", status))),
            };
        }
        parse_quote(&body, Local::now())
    }
}
