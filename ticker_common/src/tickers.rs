//! Ticker symbols and parsing helpers.
//!
//! Symbols are plain upper-case strings; the rotation order is the order in which
//! they were given, with repeated symbols collapsed onto their first occurrence.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::TickerError;

/// Tickers shown when nothing else is configured.
pub const DEFAULT_TICKERS: [&str; 7] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA"];

/// Trait providing file parsing for tickers.
pub trait TickerParser {
    /// Parses tickers from a buffered reader.
    ///
    /// Symbols may be separated by commas, whitespace or new lines. Each symbol is
    /// upper-cased and validated; returns an error on the first invalid one.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, TickerError>;
}

/// Marker type implementing [`TickerParser`] for string symbols.
pub struct Tickers;

impl TickerParser for Tickers {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, TickerError> {
        let mut tickers = Vec::new();
        let mut seen = HashSet::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(TickerError::Io)?;
            collect_symbols(&line, &mut tickers, &mut seen)?;
        }
        Ok(tickers)
    }
}

/// Parse a comma or whitespace separated list such as `"aapl, msft TSLA"`.
pub fn parse_list(raw: &str) -> Result<Vec<String>, TickerError> {
    let mut tickers = Vec::new();
    let mut seen = HashSet::new();
    collect_symbols(raw, &mut tickers, &mut seen)?;
    Ok(tickers)
}

/// Normalize a single symbol: trim, upper-case, and check the character set.
pub fn normalize_symbol(raw: &str) -> Result<String, TickerError> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(TickerError::ParseTickersFile("empty symbol".to_string()));
    }
    let valid = symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !valid {
        return Err(TickerError::ParseTickersFile(format!(
            "invalid symbol '{}'",
            raw.trim()
        )));
    }
    Ok(symbol)
}

fn collect_symbols(
    text: &str,
    tickers: &mut Vec<String>,
    seen: &mut HashSet<String>,
) -> Result<(), TickerError> {
    let tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        let symbol = normalize_symbol(token)?;
        if seen.insert(symbol.clone()) {
            tickers.push(symbol);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn file_accepts_mixed_separators() {
        let input = Cursor::new("aapl, msft\n\n  TSLA goog\nBRK.B\n");
        let tickers = Tickers::parse_from_file(input).unwrap();
        assert_eq!(tickers, vec!["AAPL", "MSFT", "TSLA", "GOOG", "BRK.B"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let tickers = parse_list("MSFT,aapl,msft,NVDA,AAPL").unwrap();
        assert_eq!(tickers, vec!["MSFT", "AAPL", "NVDA"]);
    }

    #[test]
    fn invalid_symbol_is_rejected() {
        let err = parse_list("AAPL, MS$FT").unwrap_err();
        assert!(matches!(err, TickerError::ParseTickersFile(msg) if msg.contains("MS$FT")));
    }

    #[test]
    fn blank_input_yields_empty_list() {
        assert!(parse_list("  ,, \n").unwrap().is_empty());
        let tickers = Tickers::parse_from_file(Cursor::new("\n\n")).unwrap();
        assert!(tickers.is_empty());
    }
}
