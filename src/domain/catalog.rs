//! Paging primitives shared by every catalog

use std::{fmt::Debug, future::Future, hash::Hash, sync::Arc};

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::domain::error::FetchError;

/// An entity with a stable identity inside its catalog
pub trait Identifiable {
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

/// One page of results, in server order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub can_load_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, can_load_more: bool) -> Self {
        Self {
            items,
            can_load_more,
        }
    }

    /// A page with no items and nothing after it
    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }
}

/// Position of a page inside a paginated collection (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }
}

/// Result of a single page fetch
pub type FetchResult<T> = Result<Page<T>, FetchError>;

/// The fetch capability a list consumes, one per entity type
///
/// `Q` is whatever the source needs to locate a page: a bare [`PageRequest`]
/// for plain lists, or a richer query for searchable ones.
pub trait PageSource<Q, T>: Send + Sync {
    fn fetch(&self, query: Q) -> BoxFuture<'static, FetchResult<T>>;
}

impl<Q, T, F, Fut> PageSource<Q, T> for F
where
    F: Fn(Q) -> Fut + Send + Sync,
    Fut: Future<Output = FetchResult<T>> + Send + 'static,
{
    fn fetch(&self, query: Q) -> BoxFuture<'static, FetchResult<T>> {
        self(query).boxed()
    }
}

/// Shared, swappable fetch strategy
pub type FetchHandler<Q, T> = Arc<dyn PageSource<Q, T>>;

/// Wrap a closure or source into a [`FetchHandler`]
pub fn fetch_handler<Q, T, S>(source: S) -> FetchHandler<Q, T>
where
    S: PageSource<Q, T> + 'static,
{
    Arc::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_request_first() {
        assert_eq!(PageRequest::first(20), PageRequest::new(1, 20));
    }

    #[tokio::test]
    async fn test_closure_is_a_page_source() {
        let handler: FetchHandler<PageRequest, u32> = fetch_handler(|req: PageRequest| async move {
            Ok::<_, FetchError>(Page::new(vec![req.page; req.page_size as usize], req.page < 3))
        });

        let page = handler.fetch(PageRequest::new(2, 2)).await;
        assert_eq!(page, Ok(Page::new(vec![2, 2], true)));
    }
}
