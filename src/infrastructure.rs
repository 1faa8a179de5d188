//! Infrastructure layer
//!
//! - HTTP adapters for the Art Institute of Chicago and Potter DB (`catalog`)
//! - Command line parsing (`cli`)
//! - Configuration loading (`config`)

pub mod catalog;
pub mod cli;
pub mod config;
