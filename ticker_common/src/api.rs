//! Tiingo IEX endpoint helpers and typed payload parsing.
//!
//! The endpoint returns either a single JSON object or an array holding one. A payload
//! with an `error` key is a logical failure even though the transport succeeded.

use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::model::quote::Quote;

/// Base URL of the Tiingo IEX quote endpoint.
pub const TIINGO_BASE_URL: &str = "https://api.tiingo.com/iex/";

/// Helper to build the per-ticker request URL, e.g. `.../iex/AAPL?token=...`.
pub fn quote_url(base: &str, ticker: &str, token: &str) -> String {
    format!("{}{}?token={}", base, ticker, token)
}

/// Wire format of a single Tiingo IEX quote. Every field may be missing or null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TiingoQuote {
    last: Option<f64>,
    tngo_last: Option<f64>,
    bid_price: Option<f64>,
    ask_price: Option<f64>,
    volume: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    prev_close: Option<f64>,
}

impl TiingoQuote {
    fn into_quote(self, received_at: DateTime<Local>) -> Quote {
        Quote {
            last: self.last.or(self.tngo_last),
            bid: self.bid_price,
            ask: self.ask_price,
            volume: self
                .volume
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64),
            high: self.high,
            low: self.low,
            prev_close: self.prev_close,
            received_at,
        }
    }
}

/// Decode a response body into a [`Quote`] stamped with `received_at`.
pub fn parse_quote(body: &[u8], received_at: DateTime<Local>) -> Result<Quote, FetchError> {
    let payload: Value = serde_json::from_slice(body)?;
    check_error(&payload)?;

    let object = match payload {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(FetchError::Parse("empty response array".to_string()));
            }
            items.swap_remove(0)
        }
        other => other,
    };
    if !object.is_object() {
        return Err(FetchError::Parse(format!(
            "expected a JSON object, got {}",
            kind(&object)
        )));
    }
    check_error(&object)?;

    let raw: TiingoQuote = serde_json::from_value(object)?;
    Ok(raw.into_quote(received_at))
}

fn check_error(value: &Value) -> Result<(), FetchError> {
    match value.get("error") {
        Some(Value::String(message)) => Err(FetchError::Logical(message.clone())),
        Some(other) => Err(FetchError::Logical(other.to_string())),
        None => Ok(()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Quote, FetchError> {
        parse_quote(body.as_bytes(), Local::now())
    }

    #[test]
    fn builds_request_url() {
        assert_eq!(
            quote_url(TIINGO_BASE_URL, "AAPL", "secret"),
            "https://api.tiingo.com/iex/AAPL?token=secret"
        );
    }

    #[test]
    fn parses_single_element_array() {
        let body = r#"[{"ticker":"AAPL","last":189.5,"tngoLast":189.4,"bidPrice":189.49,
            "askPrice":189.51,"volume":51234567,"high":191.0,"low":187.25,"prevClose":187.0}]"#;
        let quote = parse(body).unwrap();
        assert_eq!(quote.last, Some(189.5));
        assert_eq!(quote.bid, Some(189.49));
        assert_eq!(quote.ask, Some(189.51));
        assert_eq!(quote.volume, Some(51_234_567));
        assert_eq!(quote.high, Some(191.0));
        assert_eq!(quote.low, Some(187.25));
        assert_eq!(quote.prev_close, Some(187.0));
    }

    #[test]
    fn falls_back_to_tngo_last() {
        let quote = parse(r#"{"last":null,"tngoLast":42.0}"#).unwrap();
        assert_eq!(quote.last, Some(42.0));
    }

    #[test]
    fn missing_fields_are_independent() {
        let quote = parse(r#"{"last":150.0,"bidPrice":null}"#).unwrap();
        assert_eq!(quote.last, Some(150.0));
        assert_eq!(quote.bid, None);
        assert_eq!(quote.ask, None);
        assert_eq!(quote.volume, None);
        assert_eq!(quote.prev_close, None);
    }

    #[test]
    fn fractional_volume_is_truncated() {
        let quote = parse(r#"{"volume":1234.9}"#).unwrap();
        assert_eq!(quote.volume, Some(1234));
    }

    #[test]
    fn error_field_is_a_logical_failure() {
        let err = parse(r#"{"detail":"x","error":"Invalid ticker"}"#).unwrap_err();
        assert_eq!(err, FetchError::Logical("Invalid ticker".to_string()));

        let err = parse(r#"[{"error":{"code":404}}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Logical(msg) if msg.contains("404")));
    }

    #[test]
    fn malformed_bodies_are_parse_failures() {
        assert!(matches!(parse("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(parse("[]"), Err(FetchError::Parse(_))));
        assert!(matches!(parse("[1]"), Err(FetchError::Parse(_))));
        assert!(matches!(parse(r#"{"last":"abc"}"#), Err(FetchError::Parse(_))));
    }
}
