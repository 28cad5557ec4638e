//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules and the session state machine.
//! It has **no dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_engine`]: Session state machine (start, steer, tick, pause, menu)
//! - [`snake`]: Head-first body storage
//! - [`food`]: Food placement with border and lookahead exclusion
//! - [`rng`]: Seeded LCG used for food placement
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Movement**: one cell per tick in the current direction
//! - **Steering**: the last direction submitted before a tick wins; reversing
//!   straight into the neck is rejected when submitted
//! - **Walls**: leaving the grid ends the session
//! - **Self collision**: entering any body cell except the head ends the
//!   session (the tail cell counts even though it is about to move)
//! - **Food**: +10 points and one extra segment
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameEngine, TickOutcome};
//! use tui_snake_types::{Difficulty, Direction, GameStatus, GridSize};
//!
//! let mut game = GameEngine::new(GridSize::new(20, 15).unwrap(), 12345);
//! game.start(Difficulty::Normal);
//!
//! game.submit_direction(Direction::Left);
//! assert_ne!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.direction(), Direction::Left);
//!
//! game.toggle_pause();
//! assert_eq!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.status(), GameStatus::Paused);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Call [`GameEngine::tick`](game_engine::GameEngine::tick)
//! once per period of the current [`Difficulty`](tui_snake_types::Difficulty).

pub mod food;
pub mod game_engine;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::place_food;
pub use game_engine::{GameEngine, TickOutcome};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
