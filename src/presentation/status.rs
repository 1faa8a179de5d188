//! Placeholder and notice text for list screens

use crate::core::{state::list::Notice, view_state::ViewState};

/// Text shown instead of rows, if the state calls for it
pub fn placeholder(view_state: &ViewState) -> Option<String> {
    match view_state {
        ViewState::Idle | ViewState::Loaded => None,
        ViewState::Loading => Some("Loading…".to_string()),
        ViewState::Empty { message } => Some(message.clone()),
        ViewState::Error { message } => Some(format!("{message}\nRun the command again to retry.")),
    }
}

pub fn notice_line(notice: &Notice, retrying: bool) -> String {
    if retrying {
        format!("! {} Retrying…", notice.message)
    } else {
        format!("! {}", notice.message)
    }
}
