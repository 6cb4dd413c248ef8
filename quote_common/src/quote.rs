//! Quote data model shared by server and client.
//!
//! The upstream API returns an object keyed by currency pair (e.g. `USDBRL`)
//! whose values are `ExchangeRate`s. Every price field is kept as text so the
//! bid travels end-to-end with the exact decimal formatting of the source.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ErrorKind, QuoteError};
use crate::result::Result;

/// One currency pair as reported by the upstream API.
///
/// Every field may be missing or `null`; both decode as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    /// Base currency code (e.g. `USD`).
    #[serde(deserialize_with = "null_as_empty")]
    pub code: String,
    /// Quote currency code (e.g. `BRL`).
    #[serde(deserialize_with = "null_as_empty")]
    pub codein: String,
    /// Human readable pair name.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Session high.
    #[serde(deserialize_with = "null_as_empty")]
    pub high: String,
    /// Session low.
    #[serde(deserialize_with = "null_as_empty")]
    pub low: String,
    /// Absolute bid variation.
    #[serde(rename = "varBid", deserialize_with = "null_as_empty")]
    pub var_bid: String,
    /// Percentage variation.
    #[serde(rename = "pctChange", deserialize_with = "null_as_empty")]
    pub pct_change: String,
    /// Price the market is willing to pay for the base currency.
    #[serde(deserialize_with = "null_as_empty")]
    pub bid: String,
    /// Price the market is asking for the base currency.
    #[serde(deserialize_with = "null_as_empty")]
    pub ask: String,
    /// Unix timestamp of the observation, as text.
    #[serde(deserialize_with = "null_as_empty")]
    pub timestamp: String,
    /// Creation date of the observation, as text.
    #[serde(deserialize_with = "null_as_empty")]
    pub create_date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Upstream payload: currency pair key → raw value.
///
/// Only the requested pair is decoded; other keys may hold anything.
pub type UpstreamPayload = Map<String, Value>;

impl ExchangeRate {
    /// Decode an upstream body and pick the rate stored under `pair`.
    ///
    /// Fails with `QuoteError::Json` when the body is not a JSON object or the
    /// pair entry is not a rate, and with `QuoteError::MissingPair` when the
    /// pair is absent or carries no bid.
    pub fn from_upstream(body: &[u8], pair: &str) -> Result<ExchangeRate> {
        let mut payload: UpstreamPayload = serde_json::from_slice(body)?;
        let entry = payload
            .remove(pair)
            .ok_or_else(|| QuoteError::MissingPair(pair.to_string()))?;
        let rate: ExchangeRate = serde_json::from_value(entry)?;
        if rate.bid.is_empty() {
            return Err(QuoteError::MissingPair(pair.to_string()));
        }
        Ok(rate)
    }
}

/// The bid observed for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Bid as text, verbatim from the upstream payload.
    pub bid: String,
}

impl From<ExchangeRate> for Quote {
    fn from(rate: ExchangeRate) -> Self {
        Quote { bid: rate.bid }
    }
}

/// A persisted observation of a bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Auto-incremented row id.
    pub id: i64,
    /// Bid text as stored.
    pub bid: String,
}

/// Payload returned by the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Bid text.
    #[serde(rename = "cotacao")]
    pub bid: String,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        QuoteResponse {
            bid: quote.bid.clone(),
        }
    }
}

/// Payload returned by the quote endpoint on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure class.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<&QuoteError> for ErrorBody {
    fn from(err: &QuoteError) -> Self {
        ErrorBody {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
