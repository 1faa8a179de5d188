use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        msg::{list::ListMsg, search::SearchMsg},
        raw_msg::RawMsg,
        state::{list::Notice, search::SearchableListState},
        translator::translate_raw_to_search,
        view_state::ViewState,
    },
    domain::{
        artwork::{Artwork, ArtworkQuery},
        catalog::{FetchHandler, Identifiable},
        year_range::YearRange,
    },
    integration::controller::PagedList,
};

/// Paginated artworks narrowed by debounced search text and a year range
pub struct SearchableYearFilteredController<T: Identifiable = Artwork> {
    state: SearchableListState<T>,
    handler: FetchHandler<ArtworkQuery, T>,
    executor: CmdExecutor<T>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg<T>>,
}

impl<T> SearchableYearFilteredController<T>
where
    T: Identifiable + Send + 'static,
{
    pub fn new(
        page_size: u32,
        debounce: Duration,
        handler: FetchHandler<ArtworkQuery, T>,
    ) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: SearchableListState::new(page_size, debounce),
            handler,
            executor: CmdExecutor::new(raw_tx)?,
            raw_rx,
        })
    }

    fn dispatch(&mut self, msg: SearchMsg<T>) {
        let cmds = self.state.update(msg);
        self.executor.execute_all(cmds, &self.handler);
    }

    /// Store the text now and fetch once typing pauses
    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.dispatch(SearchMsg::UpdateSearchText(text.into()));
    }

    /// Fetch immediately, skipping the pending debounce
    pub fn submit_search(&mut self) {
        self.dispatch(SearchMsg::SubmitSearch);
    }

    pub fn clear_search(&mut self) {
        self.dispatch(SearchMsg::ClearSearch);
    }

    pub fn apply_year_range(&mut self, range: YearRange) {
        self.dispatch(SearchMsg::ApplyYearRange(range));
    }

    pub fn clear_year_range(&mut self) {
        self.dispatch(SearchMsg::ClearYearRange);
    }

    pub fn load_initial(&mut self) {
        self.dispatch(SearchMsg::List(ListMsg::LoadInitial));
    }

    pub fn refresh(&mut self) {
        self.dispatch(SearchMsg::List(ListMsg::Refresh));
    }

    pub fn load_more_if_needed(&mut self, item: &T) {
        self.load_more_after(item.id());
    }

    pub fn load_more_after(&mut self, id: T::Id) {
        self.dispatch(SearchMsg::List(ListMsg::LoadMoreIfNeeded(id)));
    }

    pub fn retry_load_more(&mut self) {
        self.dispatch(SearchMsg::List(ListMsg::RetryLoadMore));
    }

    pub fn update_fetch_handler(&mut self, handler: FetchHandler<ArtworkQuery, T>, reset_after: bool) {
        self.handler = handler;
        self.dispatch(SearchMsg::List(ListMsg::FetchHandlerReplaced { reset_after }));
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(SearchMsg::List(ListMsg::DismissNotice));
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.state.list_mut().take_notice()
    }

    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(raw) = self.raw_rx.try_recv() {
            self.apply(raw);
            applied += 1;
        }
        applied
    }

    fn is_busy(&self) -> bool {
        self.state.list().is_fetching() || self.state.is_debounce_pending()
    }

    /// Wait for one fetch or debounce completion and apply it
    ///
    /// Returns `false` right away when neither is pending.
    pub async fn next_update(&mut self) -> bool {
        if !self.is_busy() {
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

    /// Apply completions until no fetch runs and no debounce is pending
    pub async fn settle(&mut self) {
        while self.next_update().await {}
    }

    fn apply(&mut self, raw: RawMsg<T>) {
        tracing::trace!(msg = raw.name(), "Applying completion");
        self.dispatch(translate_raw_to_search(raw));
    }

    // Observers
    pub fn search_text(&self) -> &str {
        self.state.search_text()
    }

    pub fn year_range(&self) -> YearRange {
        self.state.year_range()
    }

    pub fn current_query(&self) -> ArtworkQuery {
        self.state.current_query()
    }

    pub fn items(&self) -> &[T] {
        self.state.list().items()
    }

    pub fn view_state(&self) -> &ViewState {
        self.state.view_state()
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.list().is_loading_more()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.list().is_fetching()
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.state.is_debounce_pending()
    }

    pub fn current_page(&self) -> u32 {
        self.state.list().current_page()
    }

    pub fn can_load_more(&self) -> bool {
        self.state.list().can_load_more()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.state.list().notice()
    }
}

impl<T> PagedList for SearchableYearFilteredController<T>
where
    T: Identifiable + Send + 'static,
{
    type Item = T;

    fn items(&self) -> &[T] {
        SearchableYearFilteredController::items(self)
    }

    fn view_state(&self) -> &ViewState {
        SearchableYearFilteredController::view_state(self)
    }

    fn can_load_more(&self) -> bool {
        SearchableYearFilteredController::can_load_more(self)
    }

    fn load_initial(&mut self) {
        SearchableYearFilteredController::load_initial(self);
    }

    fn load_more_after(&mut self, id: T::Id) {
        SearchableYearFilteredController::load_more_after(self, id);
    }

    fn retry_load_more(&mut self) {
        SearchableYearFilteredController::retry_load_more(self);
    }

    fn take_notice(&mut self) -> Option<Notice> {
        SearchableYearFilteredController::take_notice(self)
    }

    async fn settle(&mut self) {
        SearchableYearFilteredController::settle(self).await;
    }
}
