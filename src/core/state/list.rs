use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::{Cmd, FetchMode, FetchRequest},
        msg::list::ListMsg,
        view_state::{FetchOutcome, ViewState},
    },
    domain::{
        catalog::{FetchResult, Identifiable, PageRequest},
        error::FetchError,
    },
};

mod pagination;

pub use pagination::{InFlight, PaginationState};

pub const DEFAULT_EMPTY_MESSAGE: &str = "Nothing to show right now.";

/// One-shot message raised when loading the next page failed over existing items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn load_more_failed(error: &FetchError) -> Self {
        Self {
            message: format!("Couldn't load more: {}", error.user_message()),
        }
    }
}

/// Incrementally paginated list of one entity type
#[derive(Debug, Clone)]
pub struct ListState<T: Identifiable> {
    items: Vec<T>,
    pagination: PaginationState,
    outcome: FetchOutcome,
    view_state: ViewState,
    notice: Option<Notice>,
    empty_message: String,
}

impl<T: Identifiable> ListState<T> {
    pub fn new(page_size: u32) -> Self {
        Self::with_empty_message(page_size, DEFAULT_EMPTY_MESSAGE)
    }

    pub fn with_empty_message(page_size: u32, empty_message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationState::new(page_size),
            outcome: FetchOutcome::NotStarted,
            view_state: ViewState::Idle,
            notice: None,
            empty_message: empty_message.into(),
        }
    }

    /// List-specific update function
    /// Returns the commands the executor has to run
    pub fn update(&mut self, msg: ListMsg<T>) -> Vec<Cmd> {
        match msg {
            ListMsg::LoadInitial => {
                // Either items are already there or the first load is still pending
                if !self.items.is_empty() || self.pagination.is_fetching() {
                    return vec![];
                }
                vec![self.start_reset()]
            }

            ListMsg::Refresh => vec![self.start_reset()],

            ListMsg::LoadMoreIfNeeded(id) => {
                let is_last = self.items.last().is_some_and(|last| last.id() == id);
                if !is_last {
                    return vec![];
                }
                self.start_load_more().into_iter().collect()
            }

            ListMsg::RetryLoadMore => self.start_load_more().into_iter().collect(),

            ListMsg::FetchHandlerReplaced { reset_after } => {
                if reset_after {
                    vec![self.start_reset()]
                } else {
                    vec![]
                }
            }

            ListMsg::DismissNotice => {
                self.notice = None;
                vec![]
            }

            ListMsg::PageFetched { ticket, result } => {
                let Some(fetch) = self.pagination.finish(ticket) else {
                    tracing::debug!(?ticket, "Dropping result of superseded fetch");
                    return vec![];
                };
                self.apply_page(fetch, result);
                vec![]
            }
        }
    }

    /// Clear the list and fetch page 1, superseding any running fetch
    fn start_reset(&mut self) -> Cmd {
        let fetch = self.pagination.start_reset();
        self.items.clear();
        self.refresh_view_state();
        tracing::info!(ticket = ?fetch.ticket, "Fetching first page");
        self.fetch_cmd(fetch)
    }

    fn start_load_more(&mut self) -> Option<Cmd> {
        if !self.pagination.can_load_more()
            || self.pagination.is_fetching()
            || !self.view_state.is_loaded()
        {
            return None;
        }
        let fetch = self.pagination.start_incremental();
        tracing::info!(ticket = ?fetch.ticket, page = fetch.page, "Fetching next page");
        Some(self.fetch_cmd(fetch))
    }

    fn fetch_cmd(&self, fetch: InFlight) -> Cmd {
        Cmd::Fetch(FetchRequest {
            ticket: fetch.ticket,
            mode: fetch.mode,
            query: PageRequest::new(fetch.page, self.pagination.page_size()),
        })
    }

    fn apply_page(&mut self, fetch: InFlight, result: FetchResult<T>) {
        match result {
            Ok(page) => {
                tracing::info!(
                    page = fetch.page,
                    count = page.items.len(),
                    can_load_more = page.can_load_more,
                    "Page loaded"
                );
                match fetch.mode {
                    FetchMode::Reset => self.items = page.items,
                    FetchMode::Incremental => self.items.extend(page.items),
                }
                self.pagination.record_success(fetch, page.can_load_more);
                self.outcome = FetchOutcome::Succeeded;
            }
            Err(error) if error.is_cancelled() => {
                tracing::debug!(ticket = ?fetch.ticket, mode = ?fetch.mode, "Fetch cancelled");
                // The reset already cleared the items, so the previous outcome no longer applies
                if fetch.mode == FetchMode::Reset {
                    self.outcome = FetchOutcome::Cancelled;
                }
            }
            Err(error) => {
                tracing::warn!(
                    page = fetch.page,
                    mode = ?fetch.mode,
                    kind = %error.kind(),
                    ?error,
                    "Fetch failed"
                );
                if fetch.mode == FetchMode::Incremental && !self.items.is_empty() {
                    self.notice = Some(Notice::load_more_failed(&error));
                }
                self.outcome = FetchOutcome::Failed {
                    message: error.user_message(),
                    mode: fetch.mode,
                };
            }
        }
        self.refresh_view_state();
    }

    fn refresh_view_state(&mut self) {
        self.view_state = ViewState::derive(
            self.items.len(),
            self.pagination.is_resetting(),
            &self.outcome,
            &self.empty_message,
        );
    }

    // Observers
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn is_loading_more(&self) -> bool {
        self.pagination.is_loading_more()
    }

    pub fn is_fetching(&self) -> bool {
        self.pagination.is_fetching()
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn can_load_more(&self) -> bool {
        self.pagination.can_load_more()
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.page_size()
    }

    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Read and clear the pending notice
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
