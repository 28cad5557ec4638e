//! Snake body storage.
//!
//! Segments are kept head-first in a `VecDeque` so that a move is a
//! `push_front` plus an optional `pop_back`.

use std::collections::VecDeque;

use crate::types::{GridSize, Position, INITIAL_SNAKE_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Empty snake (no session running)
    pub fn new() -> Self {
        Self {
            body: VecDeque::new(),
        }
    }

    /// Vertical strip centred on the grid, head on top.
    pub fn spawn(grid: GridSize) -> Self {
        let head = grid.center();
        let body = (0..INITIAL_SNAKE_LEN as i16)
            .map(|i| Position::new(head.x, head.y + i))
            .collect();
        Self { body }
    }

    /// Build a snake from explicit segments, head first.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Self {
        Self {
            body: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments head first
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }

    /// Check if any segment occupies `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if `pos` hits a segment other than the head.
    ///
    /// The tail counts even though it would move away on a non-growing step.
    pub fn hits_body(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&p| p == pos)
    }

    /// Move the head to `new_head`; the tail stays when `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered_vertical_strip() {
        let snake = Snake::spawn(GridSize::new(10, 10).unwrap());
        assert_eq!(
            snake.to_vec(),
            vec![Position::new(5, 5), Position::new(5, 6), Position::new(5, 7)]
        );
        assert_eq!(snake.head(), Some(Position::new(5, 5)));
        assert_eq!(snake.tail(), Some(Position::new(5, 7)));
    }

    #[test]
    fn advance_shifts_without_growing() {
        let mut snake = Snake::spawn(GridSize::new(10, 10).unwrap());
        snake.advance(Position::new(5, 4), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(5, 4)));
        assert_eq!(snake.tail(), Some(Position::new(5, 6)));
    }

    #[test]
    fn advance_grows_by_one() {
        let mut snake = Snake::spawn(GridSize::new(10, 10).unwrap());
        snake.advance(Position::new(5, 4), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Some(Position::new(5, 7)));
    }

    #[test]
    fn hits_body_ignores_head_but_not_tail() {
        let snake = Snake::from_segments([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ]);
        assert!(!snake.hits_body(Position::new(5, 5)));
        assert!(snake.hits_body(Position::new(6, 5)));
        assert!(snake.hits_body(Position::new(5, 6)));
        assert!(!snake.hits_body(Position::new(4, 5)));
    }

    #[test]
    fn empty_snake_has_no_head() {
        let snake = Snake::new();
        assert!(snake.is_empty());
        assert_eq!(snake.head(), None);
        assert!(!snake.hits_body(Position::new(0, 0)));
    }
}
