//! Presentation layer: plain-text rendering of list screens
//!
//! - Row summaries per entity (`rows`)
//! - Placeholders and notices derived from the view state (`status`)
//! - Column-aware truncation and wrapping (`text`)

pub mod rows;
pub mod status;
pub mod text;

pub use rows::RowText;
