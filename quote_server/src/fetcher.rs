//! Outbound call to the exchange-rate API.
//!
//! A single GET per request, bounded by a total deadline (connect + response
//! body). There are no retries: any failure is returned to the caller.
use std::time::Duration;

use log::{debug, warn};
use quote_common::{ExchangeRate, Quote, QuoteError, Result};

/// HTTP client bound to one upstream URL and currency pair.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    url: String,
    pair: String,
}

impl QuoteFetcher {
    /// Build a fetcher whose every request is bounded by `timeout`.
    pub fn new(url: &str, pair: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            pair: pair.to_string(),
        })
    }

    /// Fetch the current bid for the configured pair.
    pub async fn fetch(&self) -> Result<Quote> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .inspect_err(|e| warn!("Upstream request to {} failed: {}", self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream {} answered {}", self.url, status);
            return Err(QuoteError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .inspect_err(|e| warn!("Reading upstream body failed: {}", e))?;
        let rate = ExchangeRate::from_upstream(&body, &self.pair)
            .inspect_err(|e| warn!("Unexpected upstream payload: {}", e))?;
        debug!("Upstream rate: {:?}", rate);

        Ok(Quote::from(rate))
    }
}
