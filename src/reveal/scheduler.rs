//! Deterministic incremental-reveal scheduler.
//!
//! Exposes successively longer prefixes of a target string over discrete
//! ticks: one character per configured interval, a completion notification
//! that fires exactly once, and no clock of its own.

use std::fmt;
use std::time::Duration;

/// Per-reveal timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay before the first character appears.
    pub start_delay: Duration,
    /// Delay between subsequent characters.
    pub step_delay: Duration,
}

impl RevealTiming {
    pub const fn new(start_delay: Duration, step_delay: Duration) -> Self {
        Self {
            start_delay,
            step_delay,
        }
    }

    /// Build from millisecond values, clamping negative or non-finite input
    /// to zero — the fastest allowed cadence, never an error.
    pub fn from_millis(start_delay_ms: f64, step_delay_ms: f64) -> Self {
        Self {
            start_delay: clamp_millis(start_delay_ms),
            step_delay: clamp_millis(step_delay_ms),
        }
    }
}

impl Default for RevealTiming {
    /// Stock typing cadence: 500ms lead-in, 50ms per character.
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(50))
    }
}

fn clamp_millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

/// Reveal progress over a fixed target string.
///
/// `visible` is a byte offset on a char boundary. It is monotonically
/// non-decreasing over the value's lifetime, never exceeds the target
/// length, and is mutated only by [`RevealScheduler::tick`].
#[derive(Debug, Clone)]
pub struct RevealState {
    full_text: String,
    visible: usize,
    ticking: bool,
}

impl RevealState {
    fn new(full_text: String) -> Self {
        Self {
            full_text,
            visible: 0,
            ticking: false,
        }
    }

    /// The full target string.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The currently revealed prefix.
    pub fn visible_text(&self) -> &str {
        &self.full_text[..self.visible]
    }

    /// Number of characters revealed so far.
    pub fn visible_chars(&self) -> usize {
        self.visible_text().chars().count()
    }

    /// True from the first advance until the reveal finishes. Never true
    /// for an empty target.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Whether the whole target string is visible.
    pub fn is_complete(&self) -> bool {
        self.visible == self.full_text.len()
    }

    fn advance(&mut self) {
        if let Some(c) = self.full_text[self.visible..].chars().next() {
            self.visible += c.len_utf8();
        }
    }
}

/// Outcome of a single scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Accumulated time has not reached the configured delay yet.
    Waiting,
    /// One more character was revealed.
    Advanced,
    /// This tick reached the full length; the completion callback fired.
    Completed,
    /// The reveal had already finished; the tick was a no-op.
    Idle,
}

type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Drives a [`RevealState`] from caller-supplied elapsed time.
///
/// Elapsed time accumulates across calls; each threshold crossing reveals
/// exactly one character and carries the remainder, so the average cadence
/// stays at one character per interval no matter how the time source is
/// sampled. A call never advances more than one character — a batched
/// backlog drains one character per subsequent call.
pub struct RevealScheduler {
    state: RevealState,
    timing: RevealTiming,
    accumulated: Duration,
    started: bool,
    finished: bool,
    on_complete: Option<CompletionCallback>,
}

impl RevealScheduler {
    /// Create a scheduler with nothing revealed yet.
    pub fn new(full_text: impl Into<String>, timing: RevealTiming) -> Self {
        Self {
            state: RevealState::new(full_text.into()),
            timing,
            accumulated: Duration::ZERO,
            started: false,
            finished: false,
            on_complete: None,
        }
    }

    /// Attach a callback invoked exactly once when the reveal finishes.
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn visible_text(&self) -> &str {
        self.state.visible_text()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Apply one tick with the elapsed time since the previous call.
    ///
    /// Ticks must arrive in non-decreasing time order; within that, the
    /// scheduler tolerates arbitrarily irregular intervals.
    pub fn tick(&mut self, elapsed: Duration) -> Tick {
        if self.finished {
            return Tick::Idle;
        }
        // Empty target: complete on the first tick, `ticking` never set.
        if self.state.is_complete() {
            return self.finish();
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        let threshold = if self.started {
            self.timing.step_delay
        } else {
            self.timing.start_delay
        };
        if self.accumulated < threshold {
            return Tick::Waiting;
        }
        if threshold.is_zero() {
            self.accumulated = Duration::ZERO;
        } else {
            self.accumulated -= threshold;
        }

        self.started = true;
        self.state.advance();
        if self.state.is_complete() {
            self.finish()
        } else {
            self.state.ticking = true;
            Tick::Advanced
        }
    }

    fn finish(&mut self) -> Tick {
        self.finished = true;
        self.state.ticking = false;
        tracing::debug!(chars = self.state.visible_chars(), "reveal complete");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        Tick::Completed
    }
}

impl fmt::Debug for RevealScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealScheduler")
            .field("state", &self.state)
            .field("timing", &self.timing)
            .field("accumulated", &self.accumulated)
            .field("started", &self.started)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_respects_start_delay() {
        let mut scheduler = RevealScheduler::new("ab", RevealTiming::from_millis(100.0, 10.0));
        assert_eq!(scheduler.tick(Duration::from_millis(99)), Tick::Waiting);
        assert_eq!(scheduler.visible_text(), "");
        assert_eq!(scheduler.tick(Duration::from_millis(1)), Tick::Advanced);
        assert_eq!(scheduler.visible_text(), "a");
    }

    #[test]
    fn test_large_elapsed_advances_once() {
        let mut scheduler = RevealScheduler::new("abc", RevealTiming::from_millis(0.0, 10.0));
        assert_eq!(scheduler.tick(Duration::from_secs(10)), Tick::Advanced);
        assert_eq!(scheduler.visible_text(), "a");
        // The backlog drains one character per call.
        assert_eq!(scheduler.tick(Duration::ZERO), Tick::Advanced);
        assert_eq!(scheduler.visible_text(), "ab");
    }

    #[test]
    fn test_empty_target_completes_without_ticking() {
        let mut scheduler = RevealScheduler::new("", RevealTiming::default());
        assert_eq!(scheduler.tick(Duration::from_millis(1)), Tick::Completed);
        assert!(!scheduler.state().is_ticking());
        assert_eq!(scheduler.state().visible_chars(), 0);
        assert_eq!(scheduler.tick(Duration::from_millis(1)), Tick::Idle);
    }

    #[test]
    fn test_multibyte_advance_stays_on_char_boundary() {
        let mut scheduler = RevealScheduler::new("héllo", RevealTiming::from_millis(0.0, 0.0));
        scheduler.tick(Duration::ZERO);
        assert_eq!(scheduler.visible_text(), "h");
        scheduler.tick(Duration::ZERO);
        assert_eq!(scheduler.visible_text(), "hé");
    }
}
