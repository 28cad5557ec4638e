//! Pointer swipes to directions.
//!
//! A press records where the pointer went down; the release turns the drag into
//! a direction along its dominant axis. Terminal cells are roughly twice as tall
//! as they are wide, so vertical travel is scaled by `aspect` before the axes are
//! compared.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Columns per row used to compare horizontal and vertical travel.
const DEFAULT_ASPECT: u16 = 2;

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    aspect: u16,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_aspect(DEFAULT_ASPECT)
    }

    pub fn with_aspect(aspect: u16) -> Self {
        Self {
            start: None,
            aspect: aspect.max(1),
        }
    }

    /// Feed a mouse event; returns a direction when a swipe completes.
    pub fn handle(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                self.classify(x0, y0, event.column, event.row)
            }
            _ => None,
        }
    }

    /// Forget a press in progress (e.g. when the game pauses mid-drag).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    fn classify(&self, x0: u16, y0: u16, x1: u16, y1: u16) -> Option<Direction> {
        let dx = x1 as i32 - x0 as i32;
        let dy = (y1 as i32 - y0 as i32) * self.aspect as i32;
        if dx == 0 && dy == 0 {
            return None;
        }

        if dx.abs() > dy.abs() {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(tracker: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)),
            None
        );
        tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn horizontal_swipes() {
        let mut t = SwipeTracker::new();
        assert_eq!(swipe(&mut t, (10, 10), (16, 11)), Some(Direction::Right));
        assert_eq!(swipe(&mut t, (10, 10), (4, 9)), Some(Direction::Left));
    }

    #[test]
    fn vertical_swipes_scale_rows() {
        let mut t = SwipeTracker::new();
        // 3 columns vs 2 rows (4 columns after scaling): vertical wins.
        assert_eq!(swipe(&mut t, (10, 10), (13, 12)), Some(Direction::Down));
        assert_eq!(swipe(&mut t, (10, 10), (10, 7)), Some(Direction::Up));
    }

    #[test]
    fn tap_is_not_a_swipe() {
        let mut t = SwipeTracker::new();
        assert_eq!(swipe(&mut t, (5, 5), (5, 5)), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.handle(mouse(MouseEventKind::Up(MouseButton::Left), 9, 9)), None);

        t.handle(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        t.cancel();
        assert_eq!(t.handle(mouse(MouseEventKind::Up(MouseButton::Left), 9, 0)), None);
    }

    #[test]
    fn other_buttons_and_moves_are_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.handle(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)), None);
        assert_eq!(t.handle(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 0)), None);
        assert_eq!(t.handle(mouse(MouseEventKind::Up(MouseButton::Left), 9, 0)), None);
    }
}
