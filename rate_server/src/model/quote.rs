//! Upstream quote data model and JSON helpers.
//!
//! The upstream API wraps a single observation under the pair key:
//! `{"USDBRL": {"code": ..., "bid": ..., "create_date": ...}}`. Every figure is
//! kept as the text the API sent; nothing is parsed into numbers or rounded.

use rate_common::{QuoteSummary, RateError};
use serde::{Deserialize, Serialize};

/// One upstream observation of the USD/BRL pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    /// Pair currency code (`USD`).
    pub code: String,
    /// Counter-currency code (`BRL`).
    pub codein: String,
    /// Descriptive pair name.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute bid variation.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Observation timestamp (unix seconds, as text).
    pub timestamp: String,
    /// Creation date as formatted by the API.
    pub create_date: String,
}

/// Envelope returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    /// The observation, keyed by pair.
    #[serde(rename = "USDBRL")]
    pub usdbrl: ExchangeQuote,
}

impl ExchangeQuote {
    /// Decode the quote out of a full upstream response body.
    pub fn from_upstream_json(body: &[u8]) -> Result<Self, RateError> {
        let payload: UpstreamPayload = serde_json::from_slice(body)?;
        Ok(payload.usdbrl)
    }

    /// Summary carrying only the bid, for the local endpoint.
    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary::new(self.bid.clone())
    }
}

impl From<&ExchangeQuote> for QuoteSummary {
    fn from(quote: &ExchangeQuote) -> Self {
        quote.summary()
    }
}
