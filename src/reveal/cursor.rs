use std::time::Duration;

/// Periodic visibility toggle for the trailing cursor.
///
/// Blink phase is orthogonal to the reveal cadence: which line may show a
/// cursor comes from the frame, whether it is currently lit comes from
/// here. Like the scheduler, this type receives elapsed time from the
/// caller instead of reading a timer.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    visible: bool,
    half_period: Duration,
    accumulated: Duration,
}

impl CursorBlink {
    /// Stock half-period: 500ms on, 500ms off.
    pub const DEFAULT_HALF_PERIOD: Duration = Duration::from_millis(500);

    pub fn new(half_period: Duration) -> Self {
        Self {
            visible: true,
            half_period,
            accumulated: Duration::ZERO,
        }
    }

    /// Whether the cursor is in the lit phase.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the blink clock.
    ///
    /// Multiple half-period crossings in one call fold by parity, so phase
    /// stays correct under arbitrarily large elapsed values. A zero
    /// half-period toggles on every tick.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.half_period.is_zero() {
            self.visible = !self.visible;
            return;
        }
        self.accumulated = self.accumulated.saturating_add(elapsed);
        let crossings = self.accumulated.as_nanos() / self.half_period.as_nanos();
        if crossings == 0 {
            return;
        }
        if crossings % 2 == 1 {
            self.visible = !self.visible;
        }
        let remainder = self.accumulated.as_nanos() % self.half_period.as_nanos();
        self.accumulated = Duration::from_nanos(remainder as u64);
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_PERIOD)
    }
}
