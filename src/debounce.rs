//! Resize debouncing
//!
//! Window resizes arrive as a burst of size changes while the user
//! drags. Relaying out every live chart on each one is wasted work, so
//! the burst is collapsed: the adjustment pass fires once, after the
//! events have been quiet for the configured window.

use std::time::{Duration, Instant};

/// Collapses a burst of resize events into a single deferred pass
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: Duration,
    last_event: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_event: None,
        }
    }

    /// Record one resize event at `now`; restarts the quiet window
    pub fn observe(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// True while a pass is scheduled but has not fired yet
    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// Returns true exactly once per burst, after the quiet window has
    /// elapsed since the last observed event
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(last) if now.duration_since(last) >= self.window => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending pass fires, for repaint scheduling
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_event
            .map(|last| self.window.saturating_sub(now.duration_since(last)))
    }
}
