//! HTTP suggestion client
//!
//! `SuggestionFetcher` is the capability the worker needs; `HttpFetcher`
//! implements it against a JSON listing endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use super::FetchQuery;
use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::suggestion::Suggestion;

/// Fetch candidate suggestions for a query
pub trait SuggestionFetcher: Send + Sync + 'static {
    fn fetch(
        &self,
        query: &FetchQuery,
    ) -> impl Future<Output = Result<Vec<Suggestion>, FetchError>> + Send;
}

/// Fetcher backed by a `GET` against the configured endpoint
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: Url,
    query_param: String,
}

impl HttpFetcher {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| FetchError::InvalidEndpoint {
            url: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            query_param: config.query_param.clone(),
        })
    }

    /// URL requested for `query`
    ///
    /// The endpoint is free to ignore the query parameter; results are
    /// filtered client-side either way.
    pub fn request_url(&self, query: &FetchQuery) -> Url {
        let mut url = self.endpoint.clone();
        if let FetchQuery::Matching(q) = query {
            url.query_pairs_mut().append_pair(&self.query_param, q);
        }
        url
    }
}

impl SuggestionFetcher for HttpFetcher {
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<Suggestion>, FetchError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
