//! Clock driver module - drives the engine from a fixed-period clock.
//!
//! The engine itself has no timer. This crate owns the scheduling contract:
//!
//! - Ticks are delivered only while a session is playing and not paused
//! - The period is the current difficulty's tick interval
//! - Any change of status, pause or speed (or a restart) re-anchors the schedule
//! - At most one tick per poll; a stalled loop does not replay missed ticks
//!
//! [`Session`] serializes intents and ticks onto one execution context and
//! keeps the menu cursor, so the binary only has to feed it input and time.

pub mod clock;
pub mod session;

pub use tui_snake_types as types;

pub use clock::{ClockSignals, TickClock};
pub use session::{Flow, Session};
