use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PageRequest;

/// Whether a fetch restarts the list or extends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchMode {
    /// Discard existing items and start again from page 1
    Reset,
    /// Append the next page to existing items
    Incremental,
}

/// Identity of one fetch; only the newest ticket's result is ever applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FetchTicket(pub u64);

/// Identity of one scheduled debounce; a stale ticket fires a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DebounceTicket(pub u64);

/// A fetch to run through the list's fetch handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest<Q> {
    pub ticket: FetchTicket,
    pub mode: FetchMode,
    pub query: Q,
}

impl<Q> FetchRequest<Q> {
    pub fn map_query<R>(self, f: impl FnOnce(Q) -> R) -> FetchRequest<R> {
        FetchRequest {
            ticket: self.ticket,
            mode: self.mode,
            query: f(self.query),
        }
    }
}

/// Elm-like command definitions
/// Represents the side effects a list asks its executor to perform.
/// `Q` is the query type handed to the fetch handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd<Q = PageRequest> {
    /// Start a fetch, superseding whatever fetch is still running
    Fetch(FetchRequest<Q>),

    /// Fire `DebounceElapsed(ticket)` after `delay`, replacing any pending timer
    ScheduleDebounce {
        ticket: DebounceTicket,
        delay: Duration,
    },

    /// Drop the pending debounce timer, if any
    CancelDebounce,
}

impl<Q> Cmd<Q> {
    /// Translate the fetch query, leaving other commands untouched
    pub fn map_query<R>(self, f: impl FnOnce(Q) -> R) -> Cmd<R> {
        match self {
            Cmd::Fetch(request) => Cmd::Fetch(request.map_query(f)),
            Cmd::ScheduleDebounce { ticket, delay } => Cmd::ScheduleDebounce { ticket, delay },
            Cmd::CancelDebounce => Cmd::CancelDebounce,
        }
    }

    pub fn is_reset_fetch(&self) -> bool {
        matches!(
            self,
            Cmd::Fetch(FetchRequest {
                mode: FetchMode::Reset,
                ..
            })
        )
    }

    /// The fetch request carried by this command, if any
    pub fn fetch_request(&self) -> Option<&FetchRequest<Q>> {
        match self {
            Cmd::Fetch(request) => Some(request),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reset_fetch() -> Cmd {
        Cmd::Fetch(FetchRequest {
            ticket: FetchTicket(1),
            mode: FetchMode::Reset,
            query: PageRequest::first(20),
        })
    }

    #[test]
    fn test_map_query() {
        let mapped = reset_fetch().map_query(|req| format!("page={}", req.page));
        assert_eq!(
            mapped,
            Cmd::Fetch(FetchRequest {
                ticket: FetchTicket(1),
                mode: FetchMode::Reset,
                query: "page=1".to_string(),
            })
        );
    }

    #[test]
    fn test_map_query_passes_timers_through() {
        let cmd: Cmd = Cmd::ScheduleDebounce {
            ticket: DebounceTicket(3),
            delay: Duration::from_millis(350),
        };
        assert_eq!(
            cmd.map_query(|_| ()),
            Cmd::ScheduleDebounce {
                ticket: DebounceTicket(3),
                delay: Duration::from_millis(350),
            }
        );
    }

    #[test]
    fn test_is_reset_fetch() {
        assert!(reset_fetch().is_reset_fetch());
        assert!(!Cmd::<PageRequest>::CancelDebounce.is_reset_fetch());
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = reset_fetch();
        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
