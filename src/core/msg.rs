pub mod list;
pub mod search;

pub use list::ListMsg;
pub use search::SearchMsg;
