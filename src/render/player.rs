//! Cooperative driver tying the scheduler, blink clock, and tokenizer
//! together.

use std::time::Duration;

use crate::profile::{LanguageProfile, ProfileRegistry};
use crate::reveal::{CursorBlink, RevealScheduler, RevealTiming, Tick};

use super::frame::{Frame, render_frame};

/// One animation: a target string, its timing, and a resolved profile.
///
/// Each [`Player::tick`] runs one cooperative step — the reveal scheduler
/// consumes the elapsed time, the blink clock advances in parallel, and a
/// fresh [`Frame`] is assembled from the visible prefix. The caller owns
/// the clock and hands the frame to its sink.
pub struct Player {
    scheduler: RevealScheduler,
    blink: CursorBlink,
    profile: Option<LanguageProfile>,
}

impl Player {
    /// `language` selects a profile from `registry`; unrecognized ids
    /// render unhighlighted.
    pub fn new(
        code: impl Into<String>,
        language: &str,
        timing: RevealTiming,
        registry: &ProfileRegistry,
    ) -> Self {
        Self {
            scheduler: RevealScheduler::new(code, timing),
            blink: CursorBlink::default(),
            profile: registry.get(language).cloned(),
        }
    }

    /// Attach a completion callback, invoked exactly once.
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.scheduler = self.scheduler.on_complete(callback);
        self
    }

    /// Replace the default blink clock.
    pub fn with_blink(mut self, blink: CursorBlink) -> Self {
        self.blink = blink;
        self
    }

    /// Advance both clocks and assemble the frame for this tick.
    pub fn tick(&mut self, elapsed: Duration) -> (Tick, Frame<'_>) {
        self.blink.tick(elapsed);
        let outcome = self.scheduler.tick(elapsed);
        (outcome, render_frame(self.scheduler.state(), self.profile.as_ref()))
    }

    /// Whether the cursor is currently in the lit blink phase. Combine
    /// with [`FrameLine::cursor`](super::FrameLine) in the sink.
    pub fn cursor_visible(&self) -> bool {
        self.blink.is_visible()
    }

    pub fn is_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }
}
