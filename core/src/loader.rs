//! Remote feed loader.
//!
//! # Design
//! `RemoteFeedLoader` asks its `HttpClient` for the feed endpoint and feeds
//! the response through `mapper::map`. Transport failures collapse into
//! `LoadError::Connectivity`; whatever the mapper returns is delivered as is.
//!
//! The completion handed to the transport holds only a `Weak` reference to
//! the loader's state. Once every `RemoteFeedLoader` handle is dropped the
//! pending completion finds nothing to upgrade and returns without calling
//! the caller back. A client that keeps pending completions therefore never
//! forms a reference cycle with the loader that owns it.
//!
//! Each `load` call is independent: one request, one completion, no
//! coalescing and no ordering between concurrent calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, trace};

use crate::client::HttpClient;
use crate::endpoint::TmdbApi;
use crate::error::LoadError;
use crate::http::HttpClientResult;
use crate::mapper;
use crate::types::FeedLoadResult;

/// Completion handed to `FeedLoader::load`.
pub type FeedCompletion = Box<dyn FnOnce(FeedLoadResult) + Send + 'static>;

/// Loads the movie feed.
pub trait FeedLoader {
    /// Start one load. `completion` fires exactly once unless the returned
    /// task is cancelled or the loader is dropped first.
    fn load(&self, completion: FeedCompletion) -> LoadTask;
}

/// Handle to one in-flight `load` call.
#[derive(Debug, Clone)]
pub struct LoadTask {
    cancelled: Arc<AtomicBool>,
}

impl LoadTask {
    pub(crate) fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Suppress the completion of this call. The request itself is not
    /// aborted.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

struct Shared {
    api: TmdbApi,
    client: Arc<dyn HttpClient>,
}

/// `FeedLoader` that fetches the feed over HTTP.
pub struct RemoteFeedLoader {
    shared: Arc<Shared>,
}

impl RemoteFeedLoader {
    /// Creating a loader issues no request.
    pub fn new(api: TmdbApi, client: Arc<dyn HttpClient>) -> Self {
        Self {
            shared: Arc::new(Shared { api, client }),
        }
    }

    pub fn api(&self) -> &TmdbApi {
        &self.shared.api
    }

    /// Load once and await the result.
    pub async fn load_async(&self) -> FeedLoadResult {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        // The sender only disappears without sending if the transport drops
        // the completion, which is a lost response.
        rx.await.unwrap_or(Err(LoadError::Connectivity))
    }

    fn deliver(result: HttpClientResult) -> FeedLoadResult {
        match result {
            Ok(response) => mapper::map(&response.body, response.status),
            Err(_) => Err(LoadError::Connectivity),
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedCompletion) -> LoadTask {
        let task = LoadTask::new();
        let token = task.clone();
        let loader = Arc::downgrade(&self.shared);

        debug!(path = self.shared.api.path(), "loading feed");
        self.shared.client.get(
            &self.shared.api,
            Box::new(move |result| {
                if loader.upgrade().is_none() {
                    trace!("loader dropped, discarding feed result");
                    return;
                }
                if token.is_cancelled() {
                    trace!("load cancelled, discarding feed result");
                    return;
                }
                completion(Self::deliver(result));
            }),
        );
        task
    }
}
