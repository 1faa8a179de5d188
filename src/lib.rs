//! # Galleria - paginated catalog browsing
//!
//! A client core for two public read-only catalogs, the Art Institute of Chicago
//! and Potter DB, built around one incremental pagination state machine.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): list and search state
//! - **Message** (`core::msg`): user intents and fetch completions
//! - **Update** (`update` on each state): transitions that return commands
//! - **Command** (`core::cmd`): side effects run by the `CmdExecutor`
//! - **View** (`core::view_state`, `presentation`): derived display state and text
//!
//! ## Example Usage
//!
//! ```rust
//! use galleria::core::{cmd::Cmd, msg::ListMsg, state::ListState, view_state::ViewState};
//! use galleria::domain::artwork::Artwork;
//!
//! let mut state = ListState::<Artwork>::new(20);
//! assert_eq!(state.view_state(), &ViewState::Idle);
//!
//! // The first load asks for page 1 and puts the list into Loading
//! let commands = state.update(ListMsg::LoadInitial);
//! assert!(matches!(commands.as_slice(), [Cmd::Fetch(request)] if request.query.page == 1));
//! assert!(state.view_state().is_loading());
//!
//! // Asking again while the fetch is pending does nothing
//! assert!(state.update(ListMsg::LoadInitial).is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State machines, messages, commands and their executor
//! - [`domain`] - Catalog entities, paging primitives and fetch errors
//! - [`integration`] - Controllers and the CLI runner
//! - [`infrastructure`] - HTTP adapters, CLI parsing and configuration
//! - [`presentation`] - Text rendering of list screens

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd,
    view_state::{FetchOutcome, ViewState},
};
pub use crate::domain::{
    catalog::{fetch_handler, FetchHandler, FetchResult, Identifiable, Page, PageRequest, PageSource},
    error::FetchError,
};
pub use crate::integration::{
    CharacterListController, PagedList, PaginatedFetchController,
    SearchableYearFilteredController,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
