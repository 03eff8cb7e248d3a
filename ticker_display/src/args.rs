//! Command-line arguments for the ticker display.
//!
//! This module defines the CLI interface using `clap` and turns it into a validated
//! [`Config`]. See `main` for end-to-end usage.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use ticker_common::api::TIINGO_BASE_URL;
use ticker_common::config::{
    DEFAULT_DWELL_SECS, DEFAULT_MAX_CACHE_SIZE, DEFAULT_POLL_MS, DEFAULT_REFRESH_SECS,
};
use ticker_common::tickers::{TickerParser, Tickers, parse_list};
use ticker_common::{Config, TickerError};

/// HTTP timeout used when none is given.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Tiingo API token.
    #[clap(long, env = "TIINGO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the quote endpoint; the ticker is appended to it.
    #[clap(long, default_value = TIINGO_BASE_URL)]
    pub base_url: String,

    /// Comma separated tickers to rotate through.
    #[clap(long)]
    pub tickers: Option<String>,

    /// Path to a text file with tickers; overrides `--tickers`.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,

    /// Seconds each ticker stays on screen.
    #[clap(long, default_value_t = DEFAULT_DWELL_SECS)]
    pub dwell_secs: u64,

    /// Seconds after which a cached quote is fetched again.
    #[clap(long, default_value_t = DEFAULT_REFRESH_SECS)]
    pub refresh_secs: u64,

    /// Maximum number of cached tickers.
    #[clap(long, default_value_t = DEFAULT_MAX_CACHE_SIZE)]
    pub max_cache: usize,

    /// Milliseconds between loop iterations.
    #[clap(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// HTTP request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Use synthetic offline quotes instead of the HTTP API.
    #[clap(long)]
    pub demo: bool,
}

impl Args {
    /// Build the loop configuration. Tickers come from `--path`, then `--tickers`,
    /// then the built-in list.
    pub fn to_config(&self) -> Result<Config, TickerError> {
        let defaults = Config::default();
        let tickers = if let Some(path) = &self.path {
            read_ticker_file(&normalize_path(path))?
        } else if let Some(list) = &self.tickers {
            parse_list(list)?
        } else {
            defaults.tickers
        };

        let config = Config {
            tickers,
            dwell: Duration::from_secs(self.dwell_secs),
            refresh_interval: Duration::from_secs(self.refresh_secs),
            max_cache_size: self.max_cache,
            poll_interval: Duration::from_millis(self.poll_ms),
        };
        config.validate()?;
        Ok(config)
    }

    /// HTTP timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn read_ticker_file(path: &Path) -> Result<Vec<String>, TickerError> {
    if !is_file_exist(path) {
        return Err(TickerError::Format(format!(
            "Ticker file not found: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    Tickers::parse_from_file(BufReader::new(file))
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["ticker_display", "--api-key", "k"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_device_constants() {
        let args = parse(&[]);
        assert_eq!(args.base_url, TIINGO_BASE_URL);
        assert!(!args.demo);
        assert_eq!(args.timeout(), Duration::from_secs(10));
        assert_eq!(args.to_config().unwrap(), Config::default());
    }

    #[test]
    fn tickers_and_timings_from_flags() {
        let args = parse(&[
            "--tickers",
            "spy, qqq,SPY",
            "--dwell-secs",
            "5",
            "--refresh-secs",
            "60",
            "--max-cache",
            "3",
            "--poll-ms",
            "250",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.tickers, vec!["SPY", "QQQ"]);
        assert_eq!(config.dwell, Duration::from_secs(5));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.max_cache_size, 3);
        assert_eq!(config.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn ticker_file_overrides_list() {
        let path = std::env::temp_dir().join(format!("tickers-{}.txt", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "nvda\namd, intc").unwrap();
        drop(file);

        let quoted = format!("\"{}\"", path.display());
        let args = parse(&["--tickers", "AAPL", "--path", &quoted]);
        let config = args.to_config().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.tickers, vec!["NVDA", "AMD", "INTC"]);
    }

    #[test]
    fn missing_ticker_file_is_an_error() {
        let args = parse(&["--path", "/definitely/not/here.txt"]);
        assert!(matches!(args.to_config(), Err(TickerError::Format(_))));
    }

    #[test]
    fn empty_ticker_list_fails_validation() {
        let args = parse(&["--tickers", " , "]);
        assert!(matches!(args.to_config(), Err(TickerError::EmptyTickerList)));
    }

    #[test]
    fn zero_cache_fails_validation() {
        let args = parse(&["--max-cache", "0"]);
        assert!(matches!(args.to_config(), Err(TickerError::InvalidConfig(_))));
    }
}
