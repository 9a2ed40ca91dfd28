//! Search view: a query goes in, one request goes out, and the view renders a
//! loading placeholder, the hit list, or an error.

pub mod element;

pub use element::{
    find_by_label, find_by_test_id, find_by_text, Element, ERROR_TEST_ID, LOADING_TEST_ID,
};

use crate::search::{search_url, FetchError, HttpFetch, ResultItem, SearchResponse, API};
use std::sync::Arc;
use tokio::sync::mpsc;

/// What the view currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Loading,
    Loaded(Vec<ResultItem>),
    Error(String),
}

/// A resolved request, tagged with the generation it was issued under
#[derive(Debug)]
pub struct SearchUpdate {
    pub generation: u64,
    pub query: String,
    pub result: Result<SearchResponse, FetchError>,
}

/// Search view state machine.
///
/// Every query change bumps the generation and issues a fresh request on a spawned task.
/// Responses come back over a channel; only the one matching the current generation is
/// applied, so a late response for an old query never overwrites newer state.
pub struct SearchView {
    fetcher: Arc<dyn HttpFetch>,
    base_url: String,
    query: String,
    state: SearchState,
    generation: u64,
    tx: mpsc::UnboundedSender<SearchUpdate>,
    rx: mpsc::UnboundedReceiver<SearchUpdate>,
}

impl SearchView {
    /// Mount the view and issue the request for `query`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        fetcher: Arc<dyn HttpFetch>,
        base_url: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = Self {
            fetcher,
            base_url: base_url.into(),
            query: query.into(),
            state: SearchState::Loading,
            generation: 0,
            tx,
            rx,
        };
        view.issue_request();
        view
    }

    /// Mount against the public [`API`] endpoint
    pub fn with_default_api(fetcher: Arc<dyn HttpFetch>, query: impl Into<String>) -> Self {
        Self::new(fetcher, API, query)
    }

    /// Rerender with a (possibly) new query.
    ///
    /// Returns `true` when the query changed and a new request was issued.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            tracing::trace!(query = %query, "query unchanged, no request issued");
            return false;
        }

        self.query = query;
        self.state = SearchState::Loading;
        self.issue_request();
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Number of requests issued since mount
    pub fn requests_issued(&self) -> u64 {
        self.generation
    }

    /// Apply every update that has already arrived. Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(update) = self.rx.try_recv() {
            changed |= self.apply(update);
        }
        changed
    }

    /// Wait for the next update and apply it. Returns `true` if the state changed.
    pub async fn next_update(&mut self) -> bool {
        match self.rx.recv().await {
            Some(update) => self.apply(update),
            // The view owns a sender, so the channel cannot close while `self` is alive.
            None => false,
        }
    }

    /// Transition on request completion
    fn apply(&mut self, update: SearchUpdate) -> bool {
        if update.generation != self.generation {
            tracing::debug!(
                query = %update.query,
                generation = update.generation,
                current = self.generation,
                "ignoring stale search response"
            );
            return false;
        }

        self.state = match update.result {
            Ok(response) => {
                tracing::debug!(query = %update.query, hits = response.hits.len(), "search loaded");
                SearchState::Loaded(response.hits)
            }
            Err(e) => {
                tracing::warn!(query = %update.query, error = %e, "search failed");
                SearchState::Error(e.to_string())
            }
        };
        true
    }

    fn issue_request(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let query = self.query.clone();
        let url = search_url(&self.base_url, &query);

        tracing::debug!(query = %query, generation, url = %url, "issuing search");

        let request = self.fetcher.get(&url);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = request.await;
            // Receiver dropped means the view is gone
            let _ = tx.send(SearchUpdate {
                generation,
                query,
                result,
            });
        });
    }

    /// Render the current state
    pub fn elements(&self) -> Vec<Element> {
        match &self.state {
            SearchState::Loading => vec![Element::Placeholder {
                test_id: LOADING_TEST_ID,
                text: format!("...... please wait while searching for {}", self.query),
            }],
            SearchState::Loaded(items) => items
                .iter()
                .map(|item| Element::Link {
                    text: item.title.clone(),
                    href: item.url.clone(),
                    label: format!("read more about {}", item.title),
                })
                .collect(),
            SearchState::Error(message) => vec![Element::Error {
                test_id: ERROR_TEST_ID,
                text: format!("search for {} failed: {}", self.query, message),
            }],
        }
    }

    /// The hits currently shown, if loaded
    pub fn items(&self) -> &[ResultItem] {
        match &self.state {
            SearchState::Loaded(items) => items,
            _ => &[],
        }
    }
}
