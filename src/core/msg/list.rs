use crate::{
    core::cmd::FetchTicket,
    domain::catalog::{FetchResult, Identifiable},
};

/// Messages specific to ListState
#[derive(Debug, Clone, PartialEq)]
pub enum ListMsg<T: Identifiable> {
    // User intents
    LoadInitial,
    Refresh,
    /// Proximity trigger: the UI rendered the item with this id
    LoadMoreIfNeeded(T::Id),
    /// Caller-supplied retry after a failed load-more
    RetryLoadMore,
    /// The fetch handler was swapped by the owner
    FetchHandlerReplaced { reset_after: bool },
    DismissNotice,

    // Executor results
    PageFetched {
        ticket: FetchTicket,
        result: FetchResult<T>,
    },
}

impl<T: Identifiable> ListMsg<T> {
    /// Whether this message comes from the executor rather than the user
    pub fn is_completion(&self) -> bool {
        matches!(self, ListMsg::PageFetched { .. })
    }
}
