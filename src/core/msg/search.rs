use crate::{
    core::{cmd::DebounceTicket, msg::list::ListMsg},
    domain::{catalog::Identifiable, year_range::YearRange},
};

/// Messages specific to SearchableListState
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMsg<T: Identifiable> {
    /// Delegated to the wrapped list
    List(ListMsg<T>),

    // Search text
    UpdateSearchText(String),
    SubmitSearch,
    ClearSearch,

    // Year filter
    ApplyYearRange(YearRange),
    ClearYearRange,

    // Executor results
    DebounceElapsed(DebounceTicket),
}

impl<T: Identifiable> From<ListMsg<T>> for SearchMsg<T> {
    fn from(msg: ListMsg<T>) -> Self {
        SearchMsg::List(msg)
    }
}
