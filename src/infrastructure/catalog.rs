//! HTTP adapters producing [`Page`](crate::domain::catalog::Page)s for each catalog

pub mod artic;
pub mod http;
pub mod potter;

pub use artic::ArticClient;
pub use potter::PotterClient;
