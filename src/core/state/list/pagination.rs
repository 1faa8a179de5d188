//! Pagination state management for list loading

use crate::core::cmd::{FetchMode, FetchTicket};

/// The fetch currently allowed to mutate the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub ticket: FetchTicket,
    pub mode: FetchMode,
    pub page: u32,
}

/// Manages the page cursor and the single in-flight fetch
#[derive(Debug, Clone)]
pub struct PaginationState {
    page_size: u32,
    current_page: u32,
    can_load_more: bool,
    in_flight: Option<InFlight>,
    last_ticket: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            current_page: 1,
            can_load_more: true,
            in_flight: None,
            last_ticket: 0,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Last page successfully loaded (1 before anything loads)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_resetting(&self) -> bool {
        self.in_flight
            .is_some_and(|fetch| fetch.mode == FetchMode::Reset)
    }

    pub fn is_loading_more(&self) -> bool {
        self.in_flight
            .is_some_and(|fetch| fetch.mode == FetchMode::Incremental)
    }

    /// Start a fetch of page 1, superseding any running fetch
    pub fn start_reset(&mut self) -> InFlight {
        self.current_page = 1;
        self.can_load_more = true;
        self.start(FetchMode::Reset, 1)
    }

    /// Start a fetch of the page after the current one
    pub fn start_incremental(&mut self) -> InFlight {
        let page = self.current_page + 1;
        self.start(FetchMode::Incremental, page)
    }

    fn start(&mut self, mode: FetchMode, page: u32) -> InFlight {
        self.last_ticket += 1;
        let fetch = InFlight {
            ticket: FetchTicket(self.last_ticket),
            mode,
            page,
        };
        self.in_flight = Some(fetch);
        fetch
    }

    /// Claim the in-flight fetch if `ticket` is still the current one
    ///
    /// Returns `None` for results of superseded fetches, leaving state untouched.
    pub fn finish(&mut self, ticket: FetchTicket) -> Option<InFlight> {
        match self.in_flight {
            Some(fetch) if fetch.ticket == ticket => self.in_flight.take(),
            _ => None,
        }
    }

    /// Adopt the cursor of a successfully loaded page
    pub fn record_success(&mut self, fetch: InFlight, can_load_more: bool) {
        self.current_page = fetch.page;
        self.can_load_more = can_load_more;
    }
}
