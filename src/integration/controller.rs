use std::future::Future;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        msg::list::ListMsg,
        raw_msg::RawMsg,
        state::list::{ListState, Notice},
        translator::translate_raw_to_list,
        view_state::ViewState,
    },
    domain::catalog::{FetchHandler, Identifiable, PageRequest},
};

/// Read side and paging triggers shared by every list controller
pub trait PagedList {
    type Item: Identifiable;

    fn items(&self) -> &[Self::Item];
    fn view_state(&self) -> &ViewState;
    fn can_load_more(&self) -> bool;
    fn load_initial(&mut self);
    /// Proximity trigger keyed by the id of the rendered item
    fn load_more_after(&mut self, id: <Self::Item as Identifiable>::Id);
    fn retry_load_more(&mut self);
    fn take_notice(&mut self) -> Option<Notice>;

    /// Whether a loaded item should be shown; lists may filter client-side
    fn is_visible(&self, _item: &Self::Item) -> bool {
        true
    }

    /// Apply completions until nothing is pending
    fn settle(&mut self) -> impl Future<Output = ()>;
}

/// Incrementally paginated list of one entity type
///
/// All state lives on the owner's context: fetches run on spawned tasks and their
/// results are applied only through [`process_pending`](Self::process_pending),
/// [`next_update`](Self::next_update) or [`settle`](Self::settle).
pub struct PaginatedFetchController<T: Identifiable> {
    state: ListState<T>,
    handler: FetchHandler<PageRequest, T>,
    executor: CmdExecutor<T>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg<T>>,
}

impl<T> PaginatedFetchController<T>
where
    T: Identifiable + Send + 'static,
{
    pub fn new(page_size: u32, handler: FetchHandler<PageRequest, T>) -> Result<Self> {
        Self::from_state(ListState::new(page_size), handler)
    }

    pub fn with_empty_message(
        page_size: u32,
        empty_message: impl Into<String>,
        handler: FetchHandler<PageRequest, T>,
    ) -> Result<Self> {
        Self::from_state(
            ListState::with_empty_message(page_size, empty_message),
            handler,
        )
    }

    fn from_state(state: ListState<T>, handler: FetchHandler<PageRequest, T>) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state,
            handler,
            executor: CmdExecutor::new(raw_tx)?,
            raw_rx,
        })
    }

    fn dispatch(&mut self, msg: ListMsg<T>) {
        let cmds = self.state.update(msg);
        self.executor.execute_all(cmds, &self.handler);
    }

    /// Fetch page 1 unless items are present or the first load is pending
    pub fn load_initial(&mut self) {
        self.dispatch(ListMsg::LoadInitial);
    }

    /// Fetch page 1 again, discarding items and any running fetch
    pub fn refresh(&mut self) {
        self.dispatch(ListMsg::Refresh);
    }

    /// Fetch the next page if `item` is the last one loaded
    pub fn load_more_if_needed(&mut self, item: &T) {
        self.load_more_after(item.id());
    }

    pub fn load_more_after(&mut self, id: T::Id) {
        self.dispatch(ListMsg::LoadMoreIfNeeded(id));
    }

    /// Retry affordance for a failed load-more
    pub fn retry_load_more(&mut self) {
        self.dispatch(ListMsg::RetryLoadMore);
    }

    /// Swap the fetch strategy, optionally refetching from page 1 with it
    pub fn update_fetch_handler(&mut self, handler: FetchHandler<PageRequest, T>, reset_after: bool) {
        self.handler = handler;
        self.dispatch(ListMsg::FetchHandlerReplaced { reset_after });
    }

    pub fn replace_fetch_handler(&mut self, handler: FetchHandler<PageRequest, T>) {
        self.update_fetch_handler(handler, true);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(ListMsg::DismissNotice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.state.take_notice()
    }

    /// Apply every completion that has already arrived, without waiting
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(raw) = self.raw_rx.try_recv() {
            self.apply(raw);
            applied += 1;
        }
        applied
    }

    /// Wait for one completion and apply it
    ///
    /// Returns `false` right away when no fetch is running.
    pub async fn next_update(&mut self) -> bool {
        if !self.state.is_fetching() {
            return false;
        }
        match self.raw_rx.recv().await {
            Some(raw) => {
                self.apply(raw);
                true
            }
            None => false,
        }
    }

    /// Apply completions until no fetch is running
    pub async fn settle(&mut self) {
        while self.next_update().await {}
    }

    fn apply(&mut self, raw: RawMsg<T>) {
        tracing::trace!(msg = raw.name(), "Applying completion");
        if let Some(msg) = translate_raw_to_list(raw) {
            self.dispatch(msg);
        }
    }

    // Observers
    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    pub fn view_state(&self) -> &ViewState {
        self.state.view_state()
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.is_loading_more()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching()
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page()
    }

    pub fn can_load_more(&self) -> bool {
        self.state.can_load_more()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.state.notice()
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }
}

impl<T> PagedList for PaginatedFetchController<T>
where
    T: Identifiable + Send + 'static,
{
    type Item = T;

    fn items(&self) -> &[T] {
        PaginatedFetchController::items(self)
    }

    fn view_state(&self) -> &ViewState {
        PaginatedFetchController::view_state(self)
    }

    fn can_load_more(&self) -> bool {
        PaginatedFetchController::can_load_more(self)
    }

    fn load_initial(&mut self) {
        PaginatedFetchController::load_initial(self);
    }

    fn load_more_after(&mut self, id: T::Id) {
        PaginatedFetchController::load_more_after(self, id);
    }

    fn retry_load_more(&mut self) {
        PaginatedFetchController::retry_load_more(self);
    }

    fn take_notice(&mut self) -> Option<Notice> {
        PaginatedFetchController::take_notice(self)
    }

    async fn settle(&mut self) {
        PaginatedFetchController::settle(self).await;
    }
}
