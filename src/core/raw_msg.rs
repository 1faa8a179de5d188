use crate::{
    core::cmd::{DebounceTicket, FetchTicket},
    domain::catalog::FetchResult,
};

/// Results reported back by the command executor
///
/// These arrive on the owning context through a channel and are translated into
/// list or search messages before they touch any state.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg<T> {
    PageFetched {
        ticket: FetchTicket,
        result: FetchResult<T>,
    },
    DebounceElapsed(DebounceTicket),
}

impl<T> RawMsg<T> {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            RawMsg::PageFetched { .. } => "PageFetched",
            RawMsg::DebounceElapsed(_) => "DebounceElapsed",
        }
    }
}
