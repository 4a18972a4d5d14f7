//! `QuoteSummary` — the single-field payload served on the local endpoint and
//! written to the client's output file.
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Bid price as text, exactly as the upstream API reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Bid price, serialized as `valor`.
    #[serde(rename = "valor")]
    pub bid: String,
}

impl QuoteSummary {
    /// Creates a summary for the given bid.
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }

    /// Encode the summary to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, RateError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a summary from a response body.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, RateError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Line written to the output file.
    pub fn file_line(&self) -> String {
        format!("Dólar: {}", self.bid)
    }
}
