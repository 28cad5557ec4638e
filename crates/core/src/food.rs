//! Food placement.
//!
//! Food goes on a uniformly sampled interior cell (never on the outer border
//! ring) that is free of the snake and is not the cell the head reaches on its
//! next move. Sampling gives up after [`FOOD_SAMPLE_ATTEMPTS`] tries and falls
//! back to picking among the remaining eligible cells, so placement always
//! terminates even on a crowded board.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Direction, GridSize, Position, FOOD_SAMPLE_ATTEMPTS};

/// Pick a food cell, or `None` if no interior cell is eligible.
///
/// `direction` is the direction in effect right now; the cell one step ahead of
/// the head in that direction is excluded.
pub fn place_food(
    grid: GridSize,
    snake: &Snake,
    direction: Direction,
    rng: &mut SimpleRng,
) -> Option<Position> {
    place_food_with_attempts(grid, snake, direction, rng, FOOD_SAMPLE_ATTEMPTS)
}

pub(crate) fn place_food_with_attempts(
    grid: GridSize,
    snake: &Snake,
    direction: Direction,
    rng: &mut SimpleRng,
    attempts: u32,
) -> Option<Position> {
    let lookahead = snake.head().map(|h| h.step(direction));
    let eligible = |p: Position| !snake.contains(p) && Some(p) != lookahead;

    for _ in 0..attempts {
        let candidate = rng.interior_position(grid);
        if eligible(candidate) {
            return Some(candidate);
        }
    }

    let count = interior_cells(grid).filter(|&p| eligible(p)).count();
    if count == 0 {
        return None;
    }
    let pick = rng.next_range(count as u32) as usize;
    interior_cells(grid).filter(|&p| eligible(p)).nth(pick)
}

/// Interior cells in row-major order
fn interior_cells(grid: GridSize) -> impl Iterator<Item = Position> {
    let cols = grid.cols() as i16;
    let rows = grid.rows() as i16;
    (1..rows - 1).flat_map(move |y| (1..cols - 1).map(move |x| Position::new(x, y)))
}
