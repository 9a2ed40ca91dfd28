pub mod client;

pub use client::HttpClient;

use futures::future::BoxFuture;
use serde::{Deserialize, Deserializer, Serialize};

/// Endpoint prefix for the Hacker News (Algolia) search API.
///
/// Request URLs are built as `API + "query=" + query`.
pub const API: &str = "https://hn.algolia.com/api/v1/search?";

/// HTTP fetch capability - anything that can GET a search URL and decode the response.
///
/// Calling `get` counts as issuing the request; the returned future only resolves it.
/// The future must not borrow `self` so the caller can drive it on a spawned task.
pub trait HttpFetch: Send + Sync {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse, FetchError>>;
}

/// Body returned by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching items, in the order the API returned them
    #[serde(default)]
    pub hits: Vec<ResultItem>,
}

/// Individual search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Link target
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Story title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Identifier, unique within one response
    #[serde(rename = "objectID")]
    pub id: String,
}

impl ResultItem {
    pub fn new(url: impl Into<String>, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            id: id.into(),
        }
    }
}

// Comments and "Ask HN" posts come back with `"url": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build the request URL for a query. The query value is percent-encoded.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{base_url}query={}", urlencoding::encode(query))
}

/// Search-related errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_appends_query() {
        assert_eq!(
            search_url(API, "react"),
            "https://hn.algolia.com/api/v1/search?query=react"
        );
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        assert_eq!(search_url("http://x/?", ""), "http://x/?query=");
        assert_eq!(search_url("http://x/?", "rust lang"), "http://x/?query=rust%20lang");
        assert_eq!(search_url("http://x/?", "c#"), "http://x/?query=c%23");
        assert_eq!(search_url("http://x/?", "c++"), "http://x/?query=c%2B%2B");
        assert_eq!(
            search_url("http://x/?", "rust&hitsPerPage=1"),
            "http://x/?query=rust%26hitsPerPage%3D1"
        );
        assert_eq!(search_url("http://x/?", "100%"), "http://x/?query=100%25");
    }

    #[test]
    fn test_response_maps_object_id() {
        let json = r#"{
            "hits": [
                {"url": "https://someurl.com", "title": "some title", "objectID": "123456", "points": 3}
            ],
            "nbHits": 1
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.hits,
            vec![ResultItem::new("https://someurl.com", "some title", "123456")]
        );
    }

    #[test]
    fn test_null_url_and_title_decode_as_empty() {
        let json = r#"{"hits": [{"url": null, "objectID": "1"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.hits[0].url, "");
        assert_eq!(response.hits[0].title, "");
    }

    #[test]
    fn test_missing_hits_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.hits.is_empty());
    }
}
