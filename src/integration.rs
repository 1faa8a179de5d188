//! Integration layer: controllers that wire state machines to the executor
//!
//! - `controller`: the generic paginated list
//! - `searchable`: artworks with debounced search and a year filter
//! - `characters`: Potter characters with sort order and letter groups
//! - `app_runner`: the CLI browsing loop on top of the controllers

pub mod app_runner;
pub mod characters;
pub mod controller;
pub mod searchable;

pub use characters::CharacterListController;
pub use controller::{PagedList, PaginatedFetchController};
pub use searchable::SearchableYearFilteredController;
