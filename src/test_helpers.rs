//! Scripted fetch sources for exercising controllers without a network
//!
//! Delays go through `tokio::time::sleep`, so tests on a paused clock control
//! exactly when each fetch completes.

use std::{
    future::Future,
    ops::Range,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::domain::{
    artwork::Artwork,
    catalog::{fetch_handler, FetchHandler, FetchResult, Page, PageRequest},
};

type Responder<Q, T> = dyn Fn(&Q) -> (Duration, FetchResult<T>) + Send + Sync;

/// A fetch source that records every query and answers from a script
pub struct RecordingSource<Q, T> {
    calls: Arc<Mutex<Vec<Q>>>,
    respond: Arc<Responder<Q, T>>,
}

impl<Q, T> Clone for RecordingSource<Q, T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            respond: Arc::clone(&self.respond),
        }
    }
}

impl<Q, T> RecordingSource<Q, T>
where
    Q: Clone + Send + 'static,
    T: Send + 'static,
{
    /// `respond` returns how long the fetch takes and what it yields
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&Q) -> (Duration, FetchResult<T>) + Send + Sync + 'static,
    {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    pub fn handler(&self) -> FetchHandler<Q, T> {
        let source = self.clone();
        fetch_handler(move |query: Q| source.start(query))
    }

    fn start(&self, query: Q) -> impl Future<Output = FetchResult<T>> + Send + 'static {
        let (delay, result) = (self.respond)(&query);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query);
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }

    /// Queries received so far, in call order
    pub fn calls(&self) -> Vec<Q> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Artworks with ids from `ids`, titled by id
pub fn artworks(ids: Range<u64>) -> Vec<Artwork> {
    ids.map(|id| Artwork::new(id, format!("Artwork {id}"))).collect()
}

/// The page of artworks a well-behaved server would return for `request`
pub fn artwork_page(request: PageRequest, total_pages: u32) -> Page<Artwork> {
    let size = u64::from(request.page_size);
    let start = u64::from(request.page - 1) * size;
    Page::new(
        artworks(start..start + size),
        request.page < total_pages,
    )
}

/// A source serving `total_pages` full pages of artworks, each after `delay`
pub fn paged_artworks(total_pages: u32, delay: Duration) -> RecordingSource<PageRequest, Artwork> {
    RecordingSource::new(move |request: &PageRequest| {
        (delay, Ok(artwork_page(*request, total_pages)))
    })
}
