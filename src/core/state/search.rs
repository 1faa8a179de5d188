use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::{list::ListMsg, search::SearchMsg},
        state::list::ListState,
        view_state::ViewState,
    },
    domain::{
        artwork::{Artwork, ArtworkQuery},
        catalog::{Identifiable, PageRequest},
        year_range::YearRange,
    },
};

mod debounce;

pub use debounce::{DebounceState, DEFAULT_DEBOUNCE};

pub const SEARCH_EMPTY_MESSAGE: &str =
    "No artworks matched your search. Try a different keyword or adjust the year filter.";

/// A list filtered by debounced free-text search and a year range
///
/// Every change of the filters restarts pagination. Keystrokes go through the
/// debounce timer, everything else fetches immediately.
#[derive(Debug, Clone)]
pub struct SearchableListState<T: Identifiable = Artwork> {
    list: ListState<T>,
    search_text: String,
    year_range: YearRange,
    debounce: DebounceState,
}

impl<T: Identifiable> SearchableListState<T> {
    pub fn new(page_size: u32, debounce_delay: Duration) -> Self {
        Self {
            list: ListState::with_empty_message(page_size, SEARCH_EMPTY_MESSAGE),
            search_text: String::new(),
            year_range: YearRange::default(),
            debounce: DebounceState::new(debounce_delay),
        }
    }

    /// Search-specific update function
    pub fn update(&mut self, msg: SearchMsg<T>) -> Vec<Cmd<ArtworkQuery>> {
        match msg {
            SearchMsg::List(list_msg) => {
                let cmds = self.list.update(list_msg);
                self.finish(cmds)
            }

            SearchMsg::UpdateSearchText(text) => {
                self.search_text = text;
                let ticket = self.debounce.schedule();
                vec![Cmd::ScheduleDebounce {
                    ticket,
                    delay: self.debounce.delay(),
                }]
            }

            SearchMsg::SubmitSearch => self.reset(),

            SearchMsg::ClearSearch => {
                if self.search_text.is_empty() {
                    return vec![];
                }
                self.search_text.clear();
                self.reset()
            }

            SearchMsg::ApplyYearRange(range) => {
                self.year_range = range;
                self.reset()
            }

            SearchMsg::ClearYearRange => {
                if self.year_range.is_empty() {
                    return vec![];
                }
                self.year_range = YearRange::default();
                self.reset()
            }

            SearchMsg::DebounceElapsed(ticket) => {
                if !self.debounce.fire(ticket) {
                    tracing::debug!(?ticket, "Ignoring stale debounce");
                    return vec![];
                }
                tracing::info!(search = %self.search_text.trim(), "Search text settled");
                self.reset()
            }
        }
    }

    fn reset(&mut self) -> Vec<Cmd<ArtworkQuery>> {
        let cmds = self.list.update(ListMsg::Refresh);
        self.finish(cmds)
    }

    /// Attach the current filters to outgoing fetches
    ///
    /// A reset makes any pending debounce obsolete, so its timer is dropped too.
    fn finish(&mut self, cmds: Vec<Cmd>) -> Vec<Cmd<ArtworkQuery>> {
        let mut out = Vec::with_capacity(cmds.len() + 1);
        if cmds.iter().any(Cmd::is_reset_fetch) && self.debounce.cancel() {
            out.push(Cmd::CancelDebounce);
        }
        out.extend(
            cmds.into_iter()
                .map(|cmd| cmd.map_query(|request| self.query_for(request))),
        );
        out
    }

    fn query_for(&self, request: PageRequest) -> ArtworkQuery {
        ArtworkQuery::new(request, self.search_text.trim(), self.year_range)
    }

    /// Filters that the next fetch of page 1 would use
    pub fn current_query(&self) -> ArtworkQuery {
        self.query_for(PageRequest::first(self.list.page_size()))
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn list(&self) -> &ListState<T> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState<T> {
        &mut self.list
    }

    pub fn view_state(&self) -> &ViewState {
        self.list.view_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::cmd::{DebounceTicket, FetchRequest},
        domain::catalog::Page,
    };
    use pretty_assertions::assert_eq;

    fn state() -> SearchableListState {
        SearchableListState::new(20, DEFAULT_DEBOUNCE)
    }

    fn fetches(cmds: &[Cmd<ArtworkQuery>]) -> Vec<&FetchRequest<ArtworkQuery>> {
        cmds.iter().filter_map(Cmd::fetch_request).collect()
    }

    #[test]
    fn test_typing_schedules_debounce_only() {
        let mut state = state();
        let cmds = state.update(SearchMsg::UpdateSearchText("mon".into()));
        assert_eq!(
            cmds,
            vec![Cmd::ScheduleDebounce {
                ticket: DebounceTicket(1),
                delay: DEFAULT_DEBOUNCE,
            }]
        );
        assert_eq!(state.search_text(), "mon");
        assert_eq!(state.view_state(), &ViewState::Idle);
    }

    #[test]
    fn test_debounce_fires_trimmed_search() {
        let mut state = state();
        state.update(SearchMsg::UpdateSearchText(" monet ".into()));
        let cmds = state.update(SearchMsg::DebounceElapsed(DebounceTicket(1)));

        let fetches = fetches(&cmds);
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].query.search_term, "monet");
        assert_eq!(fetches[0].query.page, 1);
        assert_eq!(state.search_text(), " monet ");
    }

    #[test]
    fn test_stale_debounce_is_noop() {
        let mut state = state();
        state.update(SearchMsg::UpdateSearchText("a".into()));
        state.update(SearchMsg::UpdateSearchText("ar".into()));
        assert!(state
            .update(SearchMsg::DebounceElapsed(DebounceTicket(1)))
            .is_empty());
        assert_eq!(
            fetches(&state.update(SearchMsg::DebounceElapsed(DebounceTicket(2)))).len(),
            1
        );
    }

    #[test]
    fn test_submit_cancels_pending_debounce() {
        let mut state = state();
        state.update(SearchMsg::UpdateSearchText("art".into()));
        let cmds = state.update(SearchMsg::SubmitSearch);
        assert_eq!(cmds[0], Cmd::CancelDebounce);
        assert_eq!(fetches(&cmds)[0].query.search_term, "art");

        assert!(state
            .update(SearchMsg::DebounceElapsed(DebounceTicket(1)))
            .is_empty());
    }

    #[test]
    fn test_clear_search() {
        let mut state = state();
        assert!(state.update(SearchMsg::ClearSearch).is_empty());

        state.update(SearchMsg::UpdateSearchText("art".into()));
        let cmds = state.update(SearchMsg::ClearSearch);
        assert_eq!(fetches(&cmds).len(), 1);
        assert!(!fetches(&cmds)[0].query.is_search_active());
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn test_year_range() {
        let mut state = state();
        assert!(state.update(SearchMsg::ClearYearRange).is_empty());

        let range = YearRange::new(Some(1850), Some(1900));
        let cmds = state.update(SearchMsg::ApplyYearRange(range));
        assert_eq!(fetches(&cmds)[0].query.year_range, range);
        assert_eq!(state.year_range(), range);

        let cmds = state.update(SearchMsg::ClearYearRange);
        assert!(fetches(&cmds)[0].query.year_range.is_empty());
    }

    #[test]
    fn test_load_more_keeps_filters() {
        let mut state = state();
        state.update(SearchMsg::UpdateSearchText("cat".into()));
        let cmds = state.update(SearchMsg::SubmitSearch);
        let ticket = fetches(&cmds)[0].ticket;

        let mut page = Vec::new();
        for id in 0..20 {
            page.push(Artwork::new(id, format!("Cat {id}")));
        }
        state.update(SearchMsg::List(ListMsg::PageFetched {
            ticket,
            result: Ok(Page::new(page, true)),
        }));

        let cmds = state.update(SearchMsg::List(ListMsg::LoadMoreIfNeeded(19)));
        let query = &fetches(&cmds)[0].query;
        assert_eq!(query.page, 2);
        assert_eq!(query.search_term, "cat");
    }

    #[test]
    fn test_current_query() {
        let mut state = state();
        state.update(SearchMsg::UpdateSearchText("  ".into()));
        state.update(SearchMsg::ApplyYearRange(YearRange::new(Some(1900), None)));
        let query = state.current_query();
        assert!(!query.is_search_active());
        assert_eq!(query.year_range.start, Some(1900));
        assert_eq!(query.limit, 20);
    }
}
