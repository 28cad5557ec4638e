use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{Difficulty, Direction, GameOverReason, GameStatus, GridSize, Position};

/// Read-only copy of everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: GridSize,
    /// Segments head first
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub game_over_reason: Option<GameOverReason>,
    /// Empty unless the last session ended
    pub game_over_message: String,
    pub episode_id: u32,
    pub steps: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    /// Hash of the visible state; equal snapshots give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            snake: Vec::new(),
            food: Position::default(),
            direction: Direction::Up,
            pending_direction: Direction::Up,
            score: 0,
            status: GameStatus::Menu,
            difficulty: Difficulty::Normal,
            game_over_reason: None,
            game_over_message: String::new(),
            episode_id: 0,
            steps: 0,
        }
    }
}
