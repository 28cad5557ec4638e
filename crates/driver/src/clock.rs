//! Fixed-period tick clock.
//!
//! The clock watches three signals of the engine (status, pause, speed) plus the
//! session id, and restarts from scratch whenever any of them changes: a running
//! clock is re-anchored to `now + period`, a stopped one stays silent. Time is
//! passed in as milliseconds so callers (and tests) own the time source.

use tui_snake_core::GameEngine;

use crate::types::GameStatus;

/// Observable engine state the clock schedules against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockSignals {
    pub status: GameStatus,
    pub paused: bool,
    pub period_ms: u32,
    pub episode_id: u32,
}

impl ClockSignals {
    pub fn of(engine: &GameEngine) -> Self {
        Self {
            status: engine.status(),
            paused: engine.paused(),
            period_ms: engine.difficulty().tick_ms(),
            episode_id: engine.episode_id(),
        }
    }

    /// Ticks are only delivered while a session is playing and not paused
    pub fn running(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused
    }
}

#[derive(Debug, Clone, Default)]
pub struct TickClock {
    signals: Option<ClockSignals>,
    next_due_ms: Option<u64>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart if `signals` differ from the last observed ones.
    ///
    /// Returns true if the clock restarted (or stopped).
    pub fn sync(&mut self, signals: ClockSignals, now_ms: u64) -> bool {
        if self.signals == Some(signals) {
            return false;
        }
        self.signals = Some(signals);
        self.next_due_ms = if signals.running() {
            Some(now_ms.saturating_add(signals.period_ms as u64))
        } else {
            None
        };
        true
    }

    /// Consume at most one due tick.
    ///
    /// A clock that fell behind by more than a period skips the missed ticks
    /// and re-anchors to `now + period` instead of firing a burst.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let (Some(due), Some(signals)) = (self.next_due_ms, self.signals) else {
            return false;
        };
        if now_ms < due {
            return false;
        }

        let period = signals.period_ms as u64;
        let next = due.saturating_add(period);
        self.next_due_ms = Some(if next <= now_ms {
            now_ms.saturating_add(period)
        } else {
            next
        });
        true
    }

    /// Milliseconds until the next tick, `None` while stopped
    pub fn timeout_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn period_ms(&self) -> Option<u32> {
        self.signals.filter(|s| s.running()).map(|s| s.period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(period_ms: u32) -> ClockSignals {
        ClockSignals {
            status: GameStatus::Playing,
            paused: false,
            period_ms,
            episode_id: 1,
        }
    }

    #[test]
    fn stopped_clock_never_fires() {
        let mut clock = TickClock::new();
        assert!(!clock.poll(10_000));
        assert_eq!(clock.timeout_ms(0), None);

        let menu = ClockSignals {
            status: GameStatus::Menu,
            ..playing(75)
        };
        assert!(clock.sync(menu, 0));
        assert!(!clock.is_running());
        assert!(!clock.poll(10_000));
    }

    #[test]
    fn fires_once_per_period() {
        let mut clock = TickClock::new();
        clock.sync(playing(75), 1000);

        assert!(!clock.poll(1074));
        assert_eq!(clock.timeout_ms(1074), Some(1));
        assert!(clock.poll(1075));
        assert!(!clock.poll(1075));
        assert!(!clock.poll(1149));
        assert!(clock.poll(1150));
    }

    #[test]
    fn late_poll_keeps_schedule_within_a_period() {
        let mut clock = TickClock::new();
        clock.sync(playing(100), 0);

        // 30ms late: the next tick stays on the initial schedule (200).
        assert!(clock.poll(130));
        assert_eq!(clock.timeout_ms(130), Some(70));
    }

    #[test]
    fn no_burst_after_stall() {
        let mut clock = TickClock::new();
        clock.sync(playing(50), 0);

        assert!(clock.poll(1000));
        assert!(!clock.poll(1000));
        assert!(!clock.poll(1049));
        assert!(clock.poll(1050));
    }

    #[test]
    fn unchanged_signals_do_not_restart() {
        let mut clock = TickClock::new();
        assert!(clock.sync(playing(75), 0));
        assert!(!clock.sync(playing(75), 50));
        assert_eq!(clock.timeout_ms(50), Some(25));
    }

    #[test]
    fn pause_stops_and_resume_restarts_with_same_period() {
        let mut clock = TickClock::new();
        clock.sync(playing(120), 0);

        let paused = ClockSignals {
            status: GameStatus::Paused,
            paused: true,
            ..playing(120)
        };
        assert!(clock.sync(paused, 60));
        assert!(!clock.poll(500));

        assert!(clock.sync(playing(120), 1000));
        assert_eq!(clock.period_ms(), Some(120));
        assert!(!clock.poll(1119));
        assert!(clock.poll(1120));
    }

    #[test]
    fn new_episode_reanchors() {
        let mut clock = TickClock::new();
        clock.sync(playing(45), 0);

        let restarted = ClockSignals {
            episode_id: 2,
            ..playing(45)
        };
        assert!(clock.sync(restarted, 30));
        assert_eq!(clock.timeout_ms(30), Some(45));
    }

    #[test]
    fn game_over_stops() {
        let mut clock = TickClock::new();
        clock.sync(playing(75), 0);
        let over = ClockSignals {
            status: GameStatus::GameOver,
            ..playing(75)
        };
        assert!(clock.sync(over, 10));
        assert!(!clock.is_running());
        assert_eq!(clock.period_ms(), None);
    }
}
