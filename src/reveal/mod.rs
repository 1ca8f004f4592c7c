//! Tick-driven reveal of a fixed target string.
//!
//! The scheduler never reads a clock: the caller owns tick delivery (real
//! timer, frame counter, or a manual driver in tests) and passes elapsed
//! time into every call. Cursor blink is a separate, independently clocked
//! toggle so the two stay independently testable.

mod cursor;
mod scheduler;

pub use cursor::CursorBlink;
pub use scheduler::{RevealScheduler, RevealState, RevealTiming, Tick};
