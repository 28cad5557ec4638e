//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`]s and turns mouse drags
//! into steering directions, so a terminal with mouse support can be played
//! with swipes.

pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use map::map_key;
pub use swipe::SwipeTracker;
