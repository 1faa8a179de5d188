//! List state machines
//!
//! - [`ListState`]: generic incremental pagination over any [`Identifiable`] item
//! - [`SearchableListState`]: a list plus debounced search text and a year filter
//!
//! [`Identifiable`]: crate::domain::catalog::Identifiable

pub mod list;
pub mod search;

pub use list::{ListState, Notice, PaginationState};
pub use search::{DebounceState, SearchableListState};
