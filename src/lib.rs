//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,driver,input,term,types}`
//! and hosts the command-line configuration used by the `tui-snake` binary.

pub mod config;

pub use tui_snake_core as core;
pub use tui_snake_driver as driver;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
