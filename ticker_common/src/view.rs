//! Text layout of a single display frame.
//!
//! A [`Frame`] turns a ticker and its optional quote into ready-to-draw strings, one per
//! display line. Missing fields become `N/A`; a missing quote blanks every line with `--`.
//! Renderers only position and colour these strings.

use chrono::{DateTime, Local};
use strum::Display;

use crate::model::quote::Quote;

/// Direction of the move against the previous close.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// RGB colour used by the round display for the change line.
    pub fn rgb(self) -> u32 {
        match self {
            Trend::Up => 0x00FF00,
            Trend::Down => 0xFF0000,
            Trend::Flat => 0xFFFFFF,
        }
    }
}

/// Transient indicator shown while a fetch is in flight or right after it failed.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    #[strum(serialize = "Loading...")]
    Loading,
    #[strum(serialize = "Error")]
    Error,
}

/// Rendered text for every line of the display.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub bid_ask: String,
    pub volume: String,
    pub high_low: String,
    pub status: String,
}

impl Frame {
    /// Lay out `ticker` with its quote, or the placeholder screen when there is none.
    pub fn new(ticker: &str, quote: Option<&Quote>) -> Self {
        match quote {
            Some(quote) => Self::with_quote(ticker, quote),
            None => Self::no_data(ticker),
        }
    }

    fn no_data(ticker: &str) -> Self {
        Self {
            title: ticker.to_string(),
            price: "--".to_string(),
            change: "--".to_string(),
            trend: Trend::Flat,
            bid_ask: "B:-- A:--".to_string(),
            volume: "Vol:--".to_string(),
            high_low: "H:-- L:--".to_string(),
            status: "No data".to_string(),
        }
    }

    fn with_quote(ticker: &str, quote: &Quote) -> Self {
        let (price, change, trend) = match quote.last {
            Some(last) => {
                let (change, trend) = format_change(quote);
                (format!("${:.2}", last), change, trend)
            }
            None => ("N/A".to_string(), "N/A".to_string(), Trend::Flat),
        };

        let bid_ask = match quote.bid_ask() {
            Some((bid, ask)) => format!("B:${:.2} A:${:.2}", bid, ask),
            None => "B/A:N/A".to_string(),
        };

        let volume = match quote.volume {
            Some(volume) => format!("Vol:{}", format_volume(volume)),
            None => "Vol:N/A".to_string(),
        };

        let high_low = match quote.range() {
            Some((high, low)) => format!("H:${:.1} L:${:.1}", high, low),
            None => "H/L:N/A".to_string(),
        };

        Self {
            title: ticker.to_string(),
            price,
            change,
            trend,
            bid_ask,
            volume,
            high_low,
            status: format_received(&quote.received_at),
        }
    }
}

fn format_change(quote: &Quote) -> (String, Trend) {
    let Some(change) = quote.change() else {
        return ("--".to_string(), Trend::Flat);
    };
    if change.absolute > 0.0 {
        (
            format!("+${:.2} ({:.1}%)", change.absolute, change.percent),
            Trend::Up,
        )
    } else if change.absolute < 0.0 {
        (
            format!("${:.2} ({:.1}%)", change.absolute, change.percent),
            Trend::Down,
        )
    } else {
        ("$0.00 (0.0%)".to_string(), Trend::Flat)
    }
}

/// Compact volume with a K/M/B suffix above one thousand.
pub fn format_volume(volume: u64) -> String {
    let v = volume as f64;
    if volume >= 1_000_000_000 {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if volume >= 1_000_000 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if volume >= 1_000 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        volume.to_string()
    }
}

fn format_received(at: &DateTime<Local>) -> String {
    format!("At {}", at.format("%H:%M"))
}
