//! Upstream rate fetcher.
//!
//! Issues one GET to the upstream API per call, bounded by the caller's
//! deadline from connect to end of body. There is no retry: a transport error,
//! an elapsed deadline or an unparseable body all end the current request.
use std::time::Duration;

use log::debug;
use rate_common::Result;
use reqwest::Client;

use crate::model::quote::ExchangeQuote;

/// Fetches `ExchangeQuote`s from a fixed upstream URL.
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: Client,
    url: String,
}

impl RateFetcher {
    /// Creates a fetcher that issues requests through `client`.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Upstream URL this fetcher queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the upstream quote, reading and decoding the full body within `deadline`.
    pub async fn fetch_quote(&self, deadline: Duration) -> Result<ExchangeQuote> {
        debug!("GET {} (deadline {:?})", self.url, deadline);
        let response = self.client.get(&self.url).timeout(deadline).send().await?;
        let body = response.bytes().await?;
        ExchangeQuote::from_upstream_json(&body)
    }
}
