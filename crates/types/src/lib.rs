//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game engine, clock driver, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a rectangular grid of `cols x rows` cells. Coordinates are
//! `(x, y)` with `x` growing to the right and `y` growing downwards; `(0, 0)` is
//! the top-left cell. The grid size is chosen once per session (usually derived
//! from the terminal size) and must be at least [`MIN_GRID_COLS`] x [`MIN_GRID_ROWS`].
//!
//! # Difficulty
//!
//! Difficulty maps 1:1 to the tick period (milliseconds per move):
//!
//! | Level | Period |
//! |-------|--------|
//! | Easy | 120ms |
//! | Normal | 75ms |
//! | Hard | 45ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Difficulty, Direction, GridSize, Position};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert!(dir.is_opposite(Direction::Down));
//! assert_eq!(Position::new(5, 5).step(dir), Position::new(5, 4));
//!
//! assert_eq!(Difficulty::Hard.tick_ms(), 45);
//!
//! let grid = GridSize::new(10, 10).unwrap();
//! assert!(grid.contains(Position::new(9, 9)));
//! assert!(!grid.contains(Position::new(-1, 3)));
//! assert!(GridSize::new(2, 10).is_none());
//! ```

/// Points awarded for each food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// Snake length at spawn
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Smallest supported grid width.
///
/// Leaves an interior column on each side of the spawn strip for food.
pub const MIN_GRID_COLS: u16 = 5;

/// Smallest supported grid height.
///
/// The spawn strip occupies rows `rows/2 ..= rows/2 + 2`, which needs 5 rows.
pub const MIN_GRID_ROWS: u16 = 5;

/// Random samples tried before food placement falls back to scanning the grid
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 1024;

/// A cell on the grid.
///
/// Signed so that the cell one step past an edge is representable; the engine
/// checks such cells against [`GridSize::contains`] before accepting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from `self` to `other` would be a 180° reversal
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Grid offset `(dx, dy)` of one step in this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Difficulty level, fixed for the duration of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Menu order, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Tick period in milliseconds
    pub fn tick_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 120,
            Difficulty::Normal => 75,
            Difficulty::Hard => 45,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }

    /// Next level in menu order, saturating at Hard
    pub fn harder(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// Previous level in menu order, saturating at Easy
    pub fn easier(&self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Normal,
            Difficulty::Normal | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

/// Session lifecycle
///
/// - **Menu**: no session running; the last score stays readable
/// - **Playing**: ticks advance the snake
/// - **Paused**: ticks and direction intents are ignored
/// - **GameOver**: terminal until the next start or a return to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The head left the grid
    Wall,
    /// The head ran into the snake's own body
    SelfCollision,
    /// No interior cell was left for food
    BoardFull,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Wall => "wall",
            GameOverReason::SelfCollision => "self_collision",
            GameOverReason::BoardFull => "board_full",
        }
    }
}

/// Validated grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    cols: u16,
    rows: u16,
}

impl GridSize {
    /// Returns `None` if either dimension is below the supported minimum.
    pub fn new(cols: u16, rows: u16) -> Option<Self> {
        if cols < MIN_GRID_COLS || rows < MIN_GRID_ROWS {
            return None;
        }
        if cols > i16::MAX as u16 || rows > i16::MAX as u16 {
            return None;
        }
        Some(Self { cols, rows })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Check if position lies within `[0, cols) x [0, rows)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u16) < self.cols && (pos.y as u16) < self.rows
    }

    /// Check if position lies off the outermost border ring
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as u16) < self.cols - 1
            && (pos.y as u16) < self.rows - 1
    }

    /// Centre cell used as the spawn head
    pub fn center(&self) -> Position {
        Position::new((self.cols / 2) as i16, (self.rows / 2) as i16)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { cols: 20, rows: 20 }
    }
}

/// Player intents produced by input mapping
///
/// Intents are context-free; the session decides what each one means for the
/// current status (e.g. `Direction(Up)` moves the menu cursor while in the menu
/// and steers the snake while playing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Direction(Direction),
    /// Toggle pause
    Pause,
    /// Accept the highlighted choice (start from the menu, resume, restart)
    Confirm,
    /// Restart with the current difficulty
    Restart,
    /// Leave the current screen (pause while playing, menu from overlays)
    Back,
    /// Start directly at a difficulty
    Difficulty(Difficulty),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_periods() {
        assert_eq!(Difficulty::Easy.tick_ms(), 120);
        assert_eq!(Difficulty::Normal.tick_ms(), 75);
        assert_eq!(Difficulty::Hard.tick_ms(), 45);
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn difficulty_cursor_saturates() {
        assert_eq!(Difficulty::Hard.harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder().harder(), Difficulty::Hard);
    }

    #[test]
    fn opposite_directions() {
        for d in Direction::ALL {
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn grid_rejects_too_small() {
        assert!(GridSize::new(4, 10).is_none());
        assert!(GridSize::new(10, 4).is_none());
        assert!(GridSize::new(MIN_GRID_COLS, MIN_GRID_ROWS).is_some());
    }

    #[test]
    fn grid_interior_excludes_border_ring() {
        let grid = GridSize::new(6, 5).unwrap();
        assert!(grid.is_interior(Position::new(1, 1)));
        assert!(grid.is_interior(Position::new(4, 3)));
        assert!(!grid.is_interior(Position::new(0, 2)));
        assert!(!grid.is_interior(Position::new(5, 2)));
        assert!(!grid.is_interior(Position::new(2, 4)));
        assert_eq!(grid.area(), 30);
    }

    #[test]
    fn spawn_strip_fits_minimum_grid() {
        let grid = GridSize::new(MIN_GRID_COLS, MIN_GRID_ROWS).unwrap();
        let head = grid.center();
        for i in 0..INITIAL_SNAKE_LEN as i16 {
            assert!(grid.contains(Position::new(head.x, head.y + i)));
        }
    }
}
