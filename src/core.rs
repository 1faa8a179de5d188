//! Core layer: pure list state machines and the side effects they request
//!
//! - `state`: list and search state, mutated only through `update`
//! - `msg` / `raw_msg`: user intents and executor results
//! - `cmd` / `cmd_executor`: side effects and their tokio runner
//! - `view_state`: the derived display state shared by every list

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod view_state;
