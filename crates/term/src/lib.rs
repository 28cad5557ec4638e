//! Terminal "game renderer" for snake.
//!
//! Renders snapshots into a simple framebuffer of styled cells, then flushes it
//! to the terminal with run-length diffs. Layout works in board cells that are
//! two columns wide so the grid looks roughly square.
//!
//! - [`GameView`] is pure and unit-testable.
//! - [`TerminalRenderer`] owns raw mode, the alternate screen and mouse capture.
//! - [`FrameThrottle`] drops redraws of unchanged frames.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport, HEADER_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::FrameThrottle;
