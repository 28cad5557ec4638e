//! Session: one execution context for intents, pause/resume and ticks.
//!
//! The binary hands every input intent and every loop iteration to a single
//! `Session`, so ticks never overlap with each other or with direction
//! changes. After each intent the tick clock is re-synced against the engine.

use tracing::trace;

use tui_snake_core::{GameEngine, GameSnapshot, TickOutcome};

use crate::clock::{ClockSignals, TickClock};
use crate::types::{Difficulty, Direction, GameStatus, GridSize, Intent};

/// Whether the main loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    clock: TickClock,
    /// Highlighted difficulty on the menu screen
    cursor: Difficulty,
}

impl Session {
    pub fn new(engine: GameEngine, cursor: Difficulty) -> Self {
        Self {
            engine,
            clock: TickClock::new(),
            cursor,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn cursor(&self) -> Difficulty {
        self.cursor
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    /// Apply one intent according to the current status.
    pub fn handle(&mut self, intent: Intent, now_ms: u64) -> Flow {
        let status = self.engine.status();
        trace!(?intent, status = status.as_str(), "intent");

        if intent == Intent::Quit {
            return Flow::Quit;
        }

        match status {
            GameStatus::Menu => self.handle_menu(intent),
            GameStatus::Playing => match intent {
                Intent::Direction(dir) => {
                    self.engine.submit_direction(dir);
                }
                Intent::Pause | Intent::Back => {
                    self.engine.toggle_pause();
                }
                Intent::Restart => self.engine.start(self.engine.difficulty()),
                Intent::Confirm | Intent::Difficulty(_) | Intent::Quit => {}
            },
            GameStatus::Paused => match intent {
                Intent::Pause | Intent::Confirm => {
                    self.engine.resume();
                }
                Intent::Restart => self.engine.start(self.engine.difficulty()),
                Intent::Back => {
                    self.engine.to_menu();
                }
                Intent::Direction(_) | Intent::Difficulty(_) | Intent::Quit => {}
            },
            GameStatus::GameOver => match intent {
                Intent::Restart | Intent::Confirm => self.engine.start(self.engine.difficulty()),
                Intent::Back => {
                    self.engine.to_menu();
                }
                Intent::Direction(_) | Intent::Pause | Intent::Difficulty(_) | Intent::Quit => {}
            },
        }

        self.sync_clock(now_ms);
        Flow::Continue
    }

    fn handle_menu(&mut self, intent: Intent) {
        match intent {
            Intent::Direction(Direction::Up) => self.cursor = self.cursor.easier(),
            Intent::Direction(Direction::Down) => self.cursor = self.cursor.harder(),
            Intent::Difficulty(difficulty) => self.start(difficulty),
            Intent::Confirm => self.start(self.cursor),
            Intent::Direction(_)
            | Intent::Pause
            | Intent::Restart
            | Intent::Back
            | Intent::Quit => {}
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        self.cursor = difficulty;
        self.engine.start(difficulty);
    }

    /// Run at most one tick if the clock says one is due.
    pub fn advance(&mut self, now_ms: u64) -> TickOutcome {
        self.sync_clock(now_ms);
        if !self.clock.poll(now_ms) {
            return TickOutcome::Idle;
        }
        let outcome = self.engine.tick();
        self.sync_clock(now_ms);
        outcome
    }

    /// Milliseconds until the next tick, `None` when no session is running
    pub fn timeout_ms(&self, now_ms: u64) -> Option<u64> {
        self.clock.timeout_ms(now_ms)
    }

    /// Change the grid for the next session; only honoured in the menu.
    pub fn resize(&mut self, grid: GridSize) -> bool {
        self.engine.resize(grid)
    }

    fn sync_clock(&mut self, now_ms: u64) {
        self.clock.sync(ClockSignals::of(&self.engine), now_ms);
    }
}
