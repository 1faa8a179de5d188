//! View state shared by every list screen
//!
//! The state is never stored as a source of truth: [`ViewState::derive`] computes it
//! from the item count, whether a reset fetch is running, and how the latest fetch
//! ended. Every list uses the same function, so screens never disagree about what
//! "empty" or "error" means.

use serde::{Deserialize, Serialize};

use crate::core::cmd::FetchMode;

/// What a list screen should display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A reset fetch is running and the list is cleared
    Loading,
    /// At least one item is available
    Loaded,
    Empty {
        message: String,
    },
    Error {
        message: String,
    },
}

/// How the most recent completed fetch ended
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchOutcome {
    #[default]
    NotStarted,
    Succeeded,
    /// A reset was abandoned after clearing the items
    Cancelled,
    Failed {
        message: String,
        mode: FetchMode,
    },
}

impl ViewState {
    /// Derive the view state
    ///
    /// A failed fetch only becomes [`ViewState::Error`] when it was a reset or when
    /// there is nothing on screen; a failed load-more keeps the list `Loaded`.
    pub fn derive(
        item_count: usize,
        reset_in_flight: bool,
        outcome: &FetchOutcome,
        empty_message: &str,
    ) -> Self {
        if reset_in_flight {
            return ViewState::Loading;
        }
        match outcome {
            FetchOutcome::NotStarted => ViewState::Idle,
            FetchOutcome::Succeeded if item_count == 0 => ViewState::Empty {
                message: empty_message.to_string(),
            },
            FetchOutcome::Succeeded => ViewState::Loaded,
            FetchOutcome::Cancelled if item_count == 0 => ViewState::Idle,
            FetchOutcome::Cancelled => ViewState::Loaded,
            FetchOutcome::Failed { message, mode }
                if *mode == FetchMode::Reset || item_count == 0 =>
            {
                ViewState::Error {
                    message: message.clone(),
                }
            }
            FetchOutcome::Failed { .. } => ViewState::Loaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Placeholder text for the empty and error states
    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Empty { message } | ViewState::Error { message } => Some(message),
            _ => None,
        }
    }
}
