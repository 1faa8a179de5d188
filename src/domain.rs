//! Domain layer
//!
//! Catalog entities and the value types every list screen shares:
//! - Paging primitives and the fetch capability (`catalog`)
//! - Fetch failures (`error`)
//! - Art Institute artworks and their year filter (`artwork`, `year_range`)
//! - Potter DB resources (`potter`)

pub mod artwork;
pub mod catalog;
pub mod error;
pub mod potter;
pub mod year_range;
