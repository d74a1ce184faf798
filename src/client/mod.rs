//! HTTP client for the search endpoint.
//!
//! A call either yields a [`SearchResponse`] or exactly one [`SearchError`];
//! nothing is retried.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::dto::api::ACCESS_TOKEN_HEADER;

pub mod classifier;
pub mod errors;
pub mod request;

pub use classifier::{classify, classify_transport};
pub use errors::{SearchError, SearchResult};
pub use request::{PreparedSearch, SearchRequest, SearchResponse};

/// Per-call timeout used unless overridden with [`SearchClient::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Search client bound to one server and access token.
#[derive(Clone, Debug)]
pub struct SearchClient {
    access_token: String,
    url: String,
    timeout: Duration,
    http: Client,
}

impl SearchClient {
    pub fn new(access_token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches one page of users.
    ///
    /// Pre-flight validation failures return before any network activity.
    pub async fn find_users(&self, req: SearchRequest) -> SearchResult<SearchResponse> {
        let prepared = PreparedSearch::new(&req)?;

        let mut url = Url::parse(&self.url).map_err(|err| {
            log::debug!("Invalid search url {}: {err}", self.url);
            SearchError::TransportUnknown(err.to_string())
        })?;
        url.set_query(Some(&prepared.query_string));

        let transport_error = |err: reqwest::Error| {
            log::debug!("Search request failed: {err}");
            classify_transport(&err, &prepared.query_string)
        };

        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        classify(status, &body, &req.order_field, prepared.limit).inspect_err(|err| {
            log::debug!("Search returned status {status}: {err}");
        })
    }
}
