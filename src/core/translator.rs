use crate::{
    core::{
        msg::{list::ListMsg, search::SearchMsg},
        raw_msg::RawMsg,
    },
    domain::catalog::Identifiable,
};

/// Translates executor results into list messages
/// Debounce timers never belong to a plain list, so they translate to nothing.
pub fn translate_raw_to_list<T: Identifiable>(raw: RawMsg<T>) -> Option<ListMsg<T>> {
    match raw {
        RawMsg::PageFetched { ticket, result } => Some(ListMsg::PageFetched { ticket, result }),
        RawMsg::DebounceElapsed(_) => None,
    }
}

/// Translates executor results into search messages
pub fn translate_raw_to_search<T: Identifiable>(raw: RawMsg<T>) -> SearchMsg<T> {
    match raw {
        RawMsg::PageFetched { ticket, result } => {
            SearchMsg::List(ListMsg::PageFetched { ticket, result })
        }
        RawMsg::DebounceElapsed(ticket) => SearchMsg::DebounceElapsed(ticket),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::cmd::{DebounceTicket, FetchTicket},
        domain::{artwork::Artwork, catalog::Page},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_page_fetched() {
        let raw = RawMsg::<Artwork>::PageFetched {
            ticket: FetchTicket(4),
            result: Ok(Page::empty()),
        };
        assert_eq!(
            translate_raw_to_list(raw.clone()),
            Some(ListMsg::PageFetched {
                ticket: FetchTicket(4),
                result: Ok(Page::empty()),
            })
        );
        assert!(matches!(
            translate_raw_to_search(raw),
            SearchMsg::List(ListMsg::PageFetched { .. })
        ));
    }

    #[test]
    fn test_translate_debounce() {
        let raw = RawMsg::<Artwork>::DebounceElapsed(DebounceTicket(2));
        assert_eq!(translate_raw_to_list(raw.clone()), None);
        assert_eq!(
            translate_raw_to_search(raw),
            SearchMsg::DebounceElapsed(DebounceTicket(2))
        );
    }
}
