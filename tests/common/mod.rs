//! Common test utilities: a deterministic HTTP stub for the search view

#![allow(dead_code)]

use futures::future::{self, BoxFuture, FutureExt};
use hnsearch::search::{FetchError, HttpFetch, ResultItem, SearchResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Reply = Result<SearchResponse, FetchError>;

enum Queued {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Records every requested URL and answers from a queue, one reply per request.
///
/// Requests with nothing queued never resolve.
#[derive(Default)]
pub struct StubFetcher {
    calls: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<Queued>>,
}

impl StubFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer the next request immediately with these hits
    pub fn resolve_next(&self, hits: Vec<ResultItem>) {
        self.push(Queued::Ready(Ok(SearchResponse { hits })));
    }

    /// Fail the next request immediately
    pub fn reject_next(&self, error: FetchError) {
        self.push(Queued::Ready(Err(error)));
    }

    /// Hold the next request open until the returned handle is resolved
    pub fn defer_next(&self) -> Resolver {
        let (tx, rx) = oneshot::channel();
        self.push(Queued::Deferred(rx));
        Resolver(tx)
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, queued: Queued) {
        self.replies.lock().unwrap().push_back(queued);
    }
}

impl HttpFetch for StubFetcher {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse, FetchError>> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.replies.lock().unwrap().pop_front() {
            Some(Queued::Ready(reply)) => future::ready(reply).boxed(),
            Some(Queued::Deferred(rx)) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::Other(anyhow::anyhow!("resolver dropped"))))
            }
            .boxed(),
            None => future::pending().boxed(),
        }
    }
}

/// Manually resolves one deferred request
pub struct Resolver(oneshot::Sender<Reply>);

impl Resolver {
    pub fn resolve(self, hits: Vec<ResultItem>) {
        let _ = self.0.send(Ok(SearchResponse { hits }));
    }

    pub fn reject(self, error: FetchError) {
        let _ = self.0.send(Err(error));
    }
}

/// The hit used throughout the search view tests
pub fn some_hit() -> ResultItem {
    ResultItem::new("https://someurl.com", "some title", "123456")
}
