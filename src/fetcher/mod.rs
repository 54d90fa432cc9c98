use std::time::Duration;

use reqwest::Client as ReqwestClient;
use url::Url;

use crate::error::{SummaryError, SummaryResult};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("url-summary-server/", env!("CARGO_PKG_VERSION"));

/// Retrieves raw page HTML over the network.
///
/// Wraps a single pooled `reqwest::Client`; cloning is cheap and shares the
/// pool. No retries are attempted and redirects follow reqwest's defaults.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: ReqwestClient,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> SummaryResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(SummaryError::Client)?;
        Ok(Fetcher { client })
    }

    pub fn with_client(client: ReqwestClient) -> Self {
        Fetcher { client }
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// `url` must be absolute; anything else is rejected before any I/O.
    /// Every network-layer failure, including a non-2xx status, collapses
    /// into [`SummaryError::FetchFailed`].
    pub async fn fetch(&self, url: &str) -> SummaryResult<String> {
        let parsed = parse_absolute(url)?;

        let fetch_failed = |source: reqwest::Error| SummaryError::FetchFailed {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_failed)?;

        response.text().await.map_err(fetch_failed)
    }
}

/// Parse `url` as an absolute URI.
pub fn parse_absolute(url: &str) -> SummaryResult<Url> {
    Url::parse(url).map_err(|source| SummaryError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
