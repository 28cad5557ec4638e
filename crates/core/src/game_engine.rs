//! Game engine module - the session state machine
//!
//! Owns the snake, food, score, direction and status of one session. The
//! engine has no clock: a driver calls [`GameEngine::tick`] at the period of the
//! current difficulty and forwards player intents in between.

use std::fmt::Write as _;

use tracing::{debug, info};

use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a call to [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed
    Idle,
    /// Moved one cell at constant length
    Moved,
    /// Moved onto the food and grew by one
    Ate,
    /// The session ended on this tick
    GameOver(GameOverReason),
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: GridSize,
    snake: Snake,
    /// Direction applied on the last tick
    direction: Direction,
    /// Latest accepted intent, applied at the start of the next tick
    pending_direction: Direction,
    food: Position,
    score: u32,
    status: GameStatus,
    difficulty: Difficulty,
    game_over_reason: Option<GameOverReason>,
    game_over_message: String,
    rng: SimpleRng,
    /// Monotonic session id (increments on every start).
    episode_id: u32,
    /// Ticks applied in the current session.
    steps: u32,
}

impl GameEngine {
    /// Create an engine in the menu with the given grid and RNG seed
    pub fn new(grid: GridSize, seed: u32) -> Self {
        Self {
            grid,
            snake: Snake::new(),
            direction: Direction::Up,
            pending_direction: Direction::Up,
            food: Position::default(),
            score: 0,
            status: GameStatus::Menu,
            difficulty: Difficulty::Normal,
            game_over_reason: None,
            game_over_message: String::new(),
            rng: SimpleRng::new(seed),
            episode_id: 0,
            steps: 0,
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Human-readable result of the last session; empty while one is running
    pub fn game_over_message(&self) -> &str {
        &self.game_over_message
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Start a fresh session, discarding whatever state the previous one left.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.snake = Snake::spawn(self.grid);
        self.direction = Direction::Up;
        self.pending_direction = Direction::Up;
        self.score = 0;
        self.steps = 0;
        self.game_over_reason = None;
        self.game_over_message.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = GameStatus::Playing;

        debug!(
            episode = self.episode_id,
            difficulty = difficulty.label(),
            cols = self.grid.cols(),
            rows = self.grid.rows(),
            "session started"
        );

        self.spawn_food();
    }

    /// Queue a direction for the next tick (last write wins).
    ///
    /// Returns false when the intent is ignored: not playing, or a reversal of
    /// the direction the snake is currently moving in.
    pub fn submit_direction(&mut self, dir: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if self.direction.is_opposite(dir) {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    /// Advance the snake by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }
        let Some(head) = self.snake.head() else {
            return TickOutcome::Idle;
        };

        self.direction = self.pending_direction;
        let new_head = head.step(self.direction);

        if !self.grid.contains(new_head) {
            return self.game_over(GameOverReason::Wall);
        }
        if self.snake.hits_body(new_head) {
            return self.game_over(GameOverReason::SelfCollision);
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        self.steps = self.steps.wrapping_add(1);

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += SCORE_PER_FOOD;
        if self.spawn_food() {
            TickOutcome::Ate
        } else {
            TickOutcome::GameOver(GameOverReason::BoardFull)
        }
    }

    /// Playing <-> Paused; ignored in any other status
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                debug!(episode = self.episode_id, "paused");
                true
            }
            GameStatus::Paused => self.resume(),
            GameStatus::Menu | GameStatus::GameOver => false,
        }
    }

    /// Paused -> Playing; ignored in any other status
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        debug!(episode = self.episode_id, "resumed");
        true
    }

    /// Leave a paused or finished session for the menu.
    ///
    /// The score stays readable so the menu can show it as the last score.
    pub fn to_menu(&mut self) -> bool {
        match self.status {
            GameStatus::Paused | GameStatus::GameOver => {
                self.status = GameStatus::Menu;
                debug!(episode = self.episode_id, score = self.score, "back to menu");
                true
            }
            GameStatus::Menu | GameStatus::Playing => false,
        }
    }

    /// Change the grid for the next session. Only allowed from the menu.
    pub fn resize(&mut self, grid: GridSize) -> bool {
        if self.status != GameStatus::Menu {
            return false;
        }
        if grid != self.grid {
            self.grid = grid;
            self.snake.clear();
        }
        true
    }

    /// Place the next food. Ends the session when no cell is eligible.
    fn spawn_food(&mut self) -> bool {
        match place_food(self.grid, &self.snake, self.direction, &mut self.rng) {
            Some(food) => {
                self.food = food;
                true
            }
            None => {
                self.game_over(GameOverReason::BoardFull);
                false
            }
        }
    }

    fn game_over(&mut self, reason: GameOverReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        self.game_over_message.clear();
        let _ = write!(self.game_over_message, "Game Over! Score: {}", self.score);

        info!(
            episode = self.episode_id,
            reason = reason.as_str(),
            score = self.score,
            length = self.snake.len(),
            steps = self.steps,
            "game over"
        );

        TickOutcome::GameOver(reason)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.snake.clear();
        out.snake.extend(self.snake.iter());
        out.food = self.food;
        out.direction = self.direction;
        out.pending_direction = self.pending_direction;
        out.score = self.score;
        out.status = self.status;
        out.difficulty = self.difficulty;
        out.game_over_reason = self.game_over_reason;
        out.game_over_message.clear();
        out.game_over_message.push_str(&self.game_over_message);
        out.episode_id = self.episode_id;
        out.steps = self.steps;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GridSize::default(), 1)
    }
}
