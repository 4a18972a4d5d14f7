//! Quote requester: one bounded GET against the local endpoint.
use std::time::Duration;

use log::debug;
use rate_common::{QuoteSummary, Result};
use reqwest::Client;

/// GET `url` and decode the `{"valor": ...}` body, all within `deadline`. No retry.
pub async fn request_quote(client: &Client, url: &str, deadline: Duration) -> Result<QuoteSummary> {
    debug!("GET {} (deadline {:?})", url, deadline);
    let response = client.get(url).timeout(deadline).send().await?;
    let body = response.bytes().await?;
    QuoteSummary::from_json_slice(&body)
}
