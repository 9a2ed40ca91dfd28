use crate::search::{FetchError, HttpFetch, SearchResponse};
use futures::future::{BoxFuture, FutureExt};
use std::time::Duration;

/// reqwest-backed [`HttpFetch`] used outside of tests
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hnsearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl HttpFetch for HttpClient {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse, FetchError>> {
        tracing::debug!(url = %url, "issuing search request");
        fetch(self.client.clone(), url.to_string()).boxed()
    }
}

async fn fetch(client: reqwest::Client, url: String) -> Result<SearchResponse, FetchError> {
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!(status = %status, url = %url, "search api error");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body: SearchResponse = response.json().await?;

    tracing::debug!(url = %url, hits = body.hits.len(), "search request completed");

    Ok(body)
}
